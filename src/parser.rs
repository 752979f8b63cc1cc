use crate::ast::{self, Expression, Operator, Statement};
use crate::lexer::Lexer;
use crate::token::{Token, TokenType};
use custom_error::custom_error;
use std::rc::Rc;
use tracing::debug;

custom_error! {
    #[derive(Clone, PartialEq)]
    pub ParseError

    UnexpectedToken{expected: TokenType, got: TokenType} = "expected next token to be {expected}, got {got} instead",
    NoPrefixParseFn{token: TokenType} = "no prefix parse function for {token} found",
    InvalidInteger{literal: String} = "could not parse {literal} as integer",
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Precedence {
    Lowest,
    Equals,
    LessGreater,
    Sum,
    Product,
    Prefix,
    Call,
}

impl From<TokenType> for Precedence {
    fn from(token_type: TokenType) -> Self {
        match token_type {
            TokenType::Eq | TokenType::NotEq => Self::Equals,
            TokenType::LT | TokenType::GT => Self::LessGreater,
            TokenType::Plus | TokenType::Minus => Self::Sum,
            TokenType::Asterisk | TokenType::Slash => Self::Product,
            TokenType::LParen => Self::Call,
            _ => Self::Lowest,
        }
    }
}

type PrefixParseFn = fn(&mut Parser) -> Option<Expression>;
type InfixParseFn = fn(&mut Parser, Expression) -> Option<Expression>;

fn prefix_parse_fn(token_type: TokenType) -> Option<PrefixParseFn> {
    match token_type {
        TokenType::Ident => Some(Parser::parse_identifier),
        TokenType::Int => Some(Parser::parse_integer_literal),
        TokenType::True | TokenType::False => Some(Parser::parse_boolean),
        TokenType::Bang | TokenType::Minus => Some(Parser::parse_prefix_expression),
        TokenType::LParen => Some(Parser::parse_grouped_expression),
        TokenType::If => Some(Parser::parse_if_expression),
        TokenType::Function => Some(Parser::parse_function_literal),
        _ => None,
    }
}

fn infix_parse_fn(token_type: TokenType) -> Option<InfixParseFn> {
    match token_type {
        TokenType::Plus
        | TokenType::Minus
        | TokenType::Asterisk
        | TokenType::Slash
        | TokenType::LT
        | TokenType::GT
        | TokenType::Eq
        | TokenType::NotEq => Some(Parser::parse_infix_expression),
        TokenType::LParen => Some(Parser::parse_call_expression),
        _ => None,
    }
}

pub struct Parser {
    lexer: Lexer,
    cur_token: Token,
    peek_token: Token,
    errors: Vec<ParseError>,
}

impl Parser {
    pub fn new(mut lexer: Lexer) -> Self {
        let cur_token = lexer.next_token();
        let peek_token = lexer.next_token();

        Self {
            lexer,
            cur_token,
            peek_token,
            errors: vec![],
        }
    }

    fn next_token(&mut self) {
        self.cur_token = std::mem::replace(&mut self.peek_token, self.lexer.next_token());
    }

    /// Parses until end of input, always returning whatever statements parsed
    /// successfully. Check `errors` before trusting the result.
    pub fn parse(&mut self) -> ast::Program {
        let mut program = ast::Program::default();

        while !self.cur_token.is(TokenType::Eof) {
            match self.parse_statement() {
                Some(stmt) => program.statements.push(stmt),
                None => self.synchronize(),
            }
            self.next_token();
        }

        program
    }

    pub fn parse_program(mut self) -> Result<ast::Program, Vec<ParseError>> {
        let program = self.parse();

        if self.errors.is_empty() {
            Ok(program)
        } else {
            Err(self.errors)
        }
    }

    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    // Skip the rest of a broken statement, stopping before a closing brace so
    // an enclosing block still sees it. A statement that broke on a `}` stays
    // on it: a block closes there, while the top level steps past it.
    fn synchronize(&mut self) {
        if self.cur_token.is(TokenType::RBrace) {
            return;
        }

        while !self.cur_token.is(TokenType::Semicolon)
            && !self.cur_token.is(TokenType::Eof)
            && !self.peek_token.is(TokenType::RBrace)
        {
            self.next_token();
        }
    }

    fn parse_statement(&mut self) -> Option<Statement> {
        match self.cur_token {
            Token::Let => self.parse_let_statement().map(Statement::Let),
            Token::Return => self.parse_return_statement().map(Statement::Return),
            _ => self.parse_expression_statement().map(Statement::Expr),
        }
    }

    fn parse_let_statement(&mut self) -> Option<ast::LetStatement> {
        if !self.expect_peek(TokenType::Ident) {
            return None;
        }

        let name = ast::Identifier::from(self.cur_token.literal());

        if !self.expect_peek(TokenType::Assign) {
            return None;
        }

        self.next_token();
        let value = self.parse_expression(Precedence::Lowest)?;

        if self.peek_token.is(TokenType::Semicolon) {
            self.next_token();
        }

        Some(ast::LetStatement { name, value })
    }

    fn parse_return_statement(&mut self) -> Option<ast::ReturnStatement> {
        if self.peek_token.is(TokenType::Semicolon) {
            self.next_token();
            return Some(ast::ReturnStatement { return_value: None });
        }
        if self.peek_token.is(TokenType::RBrace) || self.peek_token.is(TokenType::Eof) {
            return Some(ast::ReturnStatement { return_value: None });
        }

        self.next_token();
        let return_value = self.parse_expression(Precedence::Lowest)?;

        if self.peek_token.is(TokenType::Semicolon) {
            self.next_token();
        }

        Some(ast::ReturnStatement {
            return_value: Some(return_value),
        })
    }

    fn parse_expression_statement(&mut self) -> Option<ast::ExpressionStatement> {
        let expression = self.parse_expression(Precedence::Lowest)?;

        if self.peek_token.is(TokenType::Semicolon) {
            self.next_token();
        }

        Some(ast::ExpressionStatement { expression })
    }

    fn parse_expression(&mut self, precedence: Precedence) -> Option<Expression> {
        let prefix = match prefix_parse_fn(self.cur_token.token_type()) {
            Some(prefix) => prefix,
            None => {
                self.push_error(ParseError::NoPrefixParseFn {
                    token: self.cur_token.token_type(),
                });
                return None;
            }
        };

        let mut left = prefix(self)?;

        while !self.peek_token.is(TokenType::Semicolon) && precedence < self.peek_precedence() {
            let infix = match infix_parse_fn(self.peek_token.token_type()) {
                Some(infix) => infix,
                None => return Some(left),
            };

            self.next_token();
            left = infix(self, left)?;
        }

        Some(left)
    }

    fn parse_identifier(&mut self) -> Option<Expression> {
        Some(Expression::Identifier(self.cur_token.literal().into()))
    }

    fn parse_integer_literal(&mut self) -> Option<Expression> {
        let literal = self.cur_token.literal();
        match literal.parse() {
            Ok(value) => Some(Expression::IntegerLiteral(value)),
            Err(_) => {
                self.push_error(ParseError::InvalidInteger { literal });
                None
            }
        }
    }

    fn parse_boolean(&mut self) -> Option<Expression> {
        Some(Expression::Boolean(self.cur_token.is(TokenType::True)))
    }

    fn parse_prefix_expression(&mut self) -> Option<Expression> {
        let operator = Operator::from_token(&self.cur_token)?;

        self.next_token();
        let right = self.parse_expression(Precedence::Prefix)?;

        Some(Expression::Prefix(ast::PrefixExpression {
            operator,
            right: Box::new(right),
        }))
    }

    fn parse_infix_expression(&mut self, left: Expression) -> Option<Expression> {
        let operator = Operator::from_token(&self.cur_token)?;
        let precedence = self.cur_precedence();

        self.next_token();
        let right = self.parse_expression(precedence)?;

        Some(Expression::Infix(ast::InfixExpression {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }))
    }

    fn parse_grouped_expression(&mut self) -> Option<Expression> {
        self.next_token();

        let expression = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(TokenType::RParen) {
            return None;
        }

        Some(expression)
    }

    fn parse_if_expression(&mut self) -> Option<Expression> {
        if !self.expect_peek(TokenType::LParen) {
            return None;
        }

        self.next_token();
        let condition = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(TokenType::RParen) || !self.expect_peek(TokenType::LBrace) {
            return None;
        }

        let consequence = self.parse_block_statement();

        let alternative = if self.peek_token.is(TokenType::Else) {
            self.next_token();

            if !self.expect_peek(TokenType::LBrace) {
                return None;
            }

            Some(self.parse_block_statement())
        } else {
            None
        };

        Some(Expression::If(ast::IfExpression {
            condition: Box::new(condition),
            consequence,
            alternative,
        }))
    }

    // Leaves the parser on the closing brace, or on `Eof` for an unterminated block.
    fn parse_block_statement(&mut self) -> ast::BlockStatement {
        let mut statements = vec![];

        self.next_token();

        while !self.cur_token.is(TokenType::RBrace) && !self.cur_token.is(TokenType::Eof) {
            match self.parse_statement() {
                Some(stmt) => statements.push(stmt),
                None => {
                    self.synchronize();
                    if self.cur_token.is(TokenType::RBrace) {
                        break;
                    }
                }
            }
            self.next_token();
        }

        ast::BlockStatement { statements }
    }

    fn parse_function_literal(&mut self) -> Option<Expression> {
        if !self.expect_peek(TokenType::LParen) {
            return None;
        }

        let parameters = self.parse_function_parameters()?;

        if !self.expect_peek(TokenType::LBrace) {
            return None;
        }

        let body = self.parse_block_statement();

        Some(Expression::Function(ast::FunctionLiteral {
            parameters,
            body: Rc::new(body),
        }))
    }

    fn parse_function_parameters(&mut self) -> Option<Vec<ast::Identifier>> {
        let mut identifiers = vec![];

        if self.peek_token.is(TokenType::RParen) {
            self.next_token();
            return Some(identifiers);
        }

        if !self.expect_peek(TokenType::Ident) {
            return None;
        }
        identifiers.push(self.cur_token.literal().into());

        while self.peek_token.is(TokenType::Comma) {
            self.next_token();

            if !self.expect_peek(TokenType::Ident) {
                return None;
            }
            identifiers.push(self.cur_token.literal().into());
        }

        if !self.expect_peek(TokenType::RParen) {
            return None;
        }

        Some(identifiers)
    }

    fn parse_call_expression(&mut self, function: Expression) -> Option<Expression> {
        let arguments = self.parse_call_arguments()?;

        Some(Expression::Call(ast::CallExpression {
            function: Box::new(function),
            arguments,
        }))
    }

    fn parse_call_arguments(&mut self) -> Option<Vec<Expression>> {
        let mut arguments = vec![];

        if self.peek_token.is(TokenType::RParen) {
            self.next_token();
            return Some(arguments);
        }

        self.next_token();
        arguments.push(self.parse_expression(Precedence::Lowest)?);

        while self.peek_token.is(TokenType::Comma) {
            self.next_token();
            self.next_token();
            arguments.push(self.parse_expression(Precedence::Lowest)?);
        }

        if !self.expect_peek(TokenType::RParen) {
            return None;
        }

        Some(arguments)
    }

    fn peek_precedence(&self) -> Precedence {
        self.peek_token.token_type().into()
    }

    fn cur_precedence(&self) -> Precedence {
        self.cur_token.token_type().into()
    }

    fn expect_peek(&mut self, expected: TokenType) -> bool {
        if self.peek_token.is(expected) {
            self.next_token();
            true
        } else {
            self.peek_error(expected);
            false
        }
    }

    fn peek_error(&mut self, expected: TokenType) {
        self.push_error(ParseError::UnexpectedToken {
            expected,
            got: self.peek_token.token_type(),
        });
    }

    fn push_error(&mut self, error: ParseError) {
        debug!(%error, "syntax error");
        self.errors.push(error);
    }
}
