use lazy_static::lazy_static;
use std::collections::HashMap;
use strum_macros::{Display, EnumDiscriminants};

#[derive(Debug, Display, Clone, PartialEq, Eq, EnumDiscriminants)]
#[strum_discriminants(derive(Hash, Display))]
#[strum_discriminants(name(TokenType))]
pub enum Token {
    Illegal(u8),
    Eof,

    // Identifiers and literals
    Ident(String),
    Int(String),

    // Operators
    Assign,
    Plus,
    Minus,
    Slash,
    Asterisk,
    Bang,
    LT,
    GT,
    Eq,
    NotEq,

    // Delimiters
    Comma,
    Semicolon,

    LParen,
    RParen,
    LBrace,
    RBrace,

    // Keywords
    Else,
    False,
    Function,
    If,
    Let,
    Return,
    True,
}

lazy_static! {
    static ref KEYWORDS: HashMap<&'static str, Token> = vec![
        ("fn", Token::Function),
        ("let", Token::Let),
        ("if", Token::If),
        ("else", Token::Else),
        ("return", Token::Return),
        ("true", Token::True),
        ("false", Token::False),
    ]
    .into_iter()
    .collect();
}

impl From<&str> for Token {
    fn from(text: &str) -> Self {
        KEYWORDS
            .get(text)
            .cloned()
            .unwrap_or_else(|| Self::Ident(text.to_owned()))
    }
}

impl Token {
    pub fn is(&self, token_type: TokenType) -> bool {
        TokenType::from(self) == token_type
    }

    pub fn token_type(&self) -> TokenType {
        self.into()
    }

    /// The source text this token was read from.
    pub fn literal(&self) -> String {
        let text = match self {
            Self::Illegal(c) => return (*c as char).to_string(),
            Self::Ident(s) | Self::Int(s) => return s.clone(),
            Self::Eof => "",
            Self::Assign => "=",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Slash => "/",
            Self::Asterisk => "*",
            Self::Bang => "!",
            Self::LT => "<",
            Self::GT => ">",
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::Else => "else",
            Self::False => "false",
            Self::Function => "fn",
            Self::If => "if",
            Self::Let => "let",
            Self::Return => "return",
            Self::True => "true",
        };
        text.to_owned()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_keyword_lookup() {
        let cases = vec![
            ("fn", Token::Function),
            ("let", Token::Let),
            ("return", Token::Return),
            ("true", Token::True),
            ("lettuce", Token::Ident("lettuce".to_owned())),
            ("_x", Token::Ident("_x".to_owned())),
        ];

        for (text, token) in cases.into_iter() {
            assert_eq!(Token::from(text), token);
        }
    }

    #[test]
    fn test_literal() {
        assert_eq!(Token::NotEq.literal(), "!=");
        assert_eq!(Token::Illegal(b'@').literal(), "@");
        assert_eq!(Token::Int("42".to_owned()).literal(), "42");
        assert_eq!(Token::Eof.literal(), "");
    }

    #[test]
    fn test_token_type() {
        assert!(Token::Ident("x".to_owned()).is(TokenType::Ident));
        assert_eq!(Token::LParen.token_type(), TokenType::LParen);
        assert_eq!(TokenType::RParen.to_string(), "RParen");
    }
}
