use crate::ast::{self, Expression, Operator, Statement};
use crate::environment::{Env, Environment};
use crate::object::{EvalError, FunctionObject, Object, Result};
use std::rc::Rc;
use tracing::{debug, trace};

/// Evaluates a whole program against `env`, which keeps any bindings made.
///
/// Returns `None` when nothing produced a value, e.g. an empty program or one
/// ending in a `let`. A top-level `return` stops the program and yields its
/// operand.
pub fn eval(program: &ast::Program, env: &Env) -> Result<Option<Object>> {
    let result = eval_program(program, env);
    if let Err(err) = &result {
        debug!(%err, "evaluation failed");
    }
    result
}

fn eval_program(program: &ast::Program, env: &Env) -> Result<Option<Object>> {
    let mut result = None;

    for stmt in program.statements.iter() {
        match eval_statement(stmt, env)? {
            Some(Object::ReturnValue(value)) => return Ok(Some(*value)),
            value => result = value,
        }
    }

    Ok(result)
}

// Unlike a program, a block hands a `ReturnValue` up still wrapped so that
// it keeps unwinding until the enclosing call.
fn eval_block_statement(block: &ast::BlockStatement, env: &Env) -> Result<Option<Object>> {
    let mut result = None;

    for stmt in block.statements.iter() {
        let value = eval_statement(stmt, env)?;
        if value.as_ref().map_or(false, Object::is_return_value) {
            return Ok(value);
        }
        result = value;
    }

    Ok(result)
}

fn eval_statement(stmt: &Statement, env: &Env) -> Result<Option<Object>> {
    match stmt {
        Statement::Expr(stmt) => eval_expression(&stmt.expression, env).map(Some),
        Statement::Let(let_stmt) => {
            let value = eval_expression(&let_stmt.value, env)?;
            if value.is_return_value() {
                return Ok(Some(value));
            }
            env.borrow_mut().set(&let_stmt.name.value, value);
            Ok(None)
        }
        Statement::Return(ret_stmt) => {
            let value = match &ret_stmt.return_value {
                Some(expr) => eval_expression(expr, env)?,
                None => Object::Null,
            };
            Ok(Some(Object::ReturnValue(Box::new(value))))
        }
        Statement::Block(block) => eval_block_statement(block, env),
    }
}

// A `return` inside an operand (`1 + if (c) { return 2 }`) abandons the
// enclosing expression and keeps unwinding to the nearest call or program.
macro_rules! eval_operand {
    ($expr:expr, $env:expr) => {
        match eval_expression($expr, $env)? {
            obj @ Object::ReturnValue(_) => return Ok(obj),
            obj => obj,
        }
    };
}

fn eval_expression(expr: &Expression, env: &Env) -> Result<Object> {
    match expr {
        Expression::Identifier(ident) => eval_identifier(ident, env),
        Expression::IntegerLiteral(n) => Ok(Object::Integer(*n)),
        Expression::Boolean(b) => Ok(Object::Boolean(*b)),
        Expression::Prefix(prefix) => {
            let right = eval_operand!(&prefix.right, env);
            eval_prefix_expression(prefix.operator, right)
        }
        Expression::Infix(infix) => {
            let left = eval_operand!(&infix.left, env);
            let right = eval_operand!(&infix.right, env);
            eval_infix_expression(infix.operator, left, right)
        }
        Expression::If(if_expr) => eval_if_expression(if_expr, env),
        Expression::Function(func) => Ok(FunctionObject {
            parameters: func.parameters.clone(),
            body: Rc::clone(&func.body),
            env: Rc::clone(env),
        }
        .into()),
        Expression::Call(call) => {
            let function = match eval_operand!(&call.function, env) {
                Object::Function(func) => func,
                obj => {
                    return Err(EvalError::NotAFunction {
                        type_name: obj.type_name(),
                    })
                }
            };

            let mut arguments = Vec::with_capacity(call.arguments.len());
            for arg in call.arguments.iter() {
                arguments.push(eval_operand!(arg, env));
            }

            apply_function(&function, arguments)
        }
    }
}

fn eval_identifier(ident: &ast::Identifier, env: &Env) -> Result<Object> {
    env.borrow()
        .get(&ident.value)
        .ok_or_else(|| EvalError::IdentifierNotFound {
            id: ident.value.clone(),
        })
}

fn eval_if_expression(if_expr: &ast::IfExpression, env: &Env) -> Result<Object> {
    let condition = eval_operand!(&if_expr.condition, env);

    let branch = if condition.is_truthy() {
        Some(&if_expr.consequence)
    } else {
        if_expr.alternative.as_ref()
    };

    match branch {
        Some(block) => Ok(eval_block_statement(block, env)?.unwrap_or_default()),
        None => Ok(Object::Null),
    }
}

fn apply_function(function: &FunctionObject, arguments: Vec<Object>) -> Result<Object> {
    if function.parameters.len() != arguments.len() {
        return Err(EvalError::IncorrectArity {
            got: arguments.len(),
            want: function.parameters.len(),
        });
    }

    trace!(function = %function, arity = arguments.len(), "calling function");

    let env = Environment::new_enclosed(&function.env);
    {
        let mut scope = env.borrow_mut();
        for (param, arg) in function.parameters.iter().zip(arguments) {
            scope.set(&param.value, arg);
        }
    }

    let result = eval_block_statement(&function.body, &env)?;
    Ok(result.map(Object::unwrap_return).unwrap_or_default())
}

fn eval_prefix_expression(operator: Operator, right: Object) -> Result<Object> {
    match operator {
        Operator::Bang => Ok(Object::Boolean(!right.is_truthy())),
        Operator::Minus => eval_prefix_minus_operator(right),
        _ => Err(EvalError::UnknownPrefixOperator {
            operator,
            operand: right.type_name(),
        }),
    }
}

fn eval_prefix_minus_operator(right: Object) -> Result<Object> {
    match right {
        Object::Integer(n) => Ok(Object::Integer(n.wrapping_neg())),
        obj => Err(EvalError::UnknownPrefixOperator {
            operator: Operator::Minus,
            operand: obj.type_name(),
        }),
    }
}

fn eval_infix_expression(operator: Operator, left: Object, right: Object) -> Result<Object> {
    match (left, right) {
        (Object::Integer(x), Object::Integer(y)) => eval_integer_infix_expression(operator, x, y),
        (Object::Boolean(x), Object::Boolean(y)) => eval_boolean_infix_expression(operator, x, y),
        (left, right) => Err(EvalError::binary_op_error(
            left.type_name(),
            operator,
            right.type_name(),
        )),
    }
}

fn eval_integer_infix_expression(operator: Operator, left: i64, right: i64) -> Result<Object> {
    Ok(match operator {
        Operator::Plus => Object::Integer(left.wrapping_add(right)),
        Operator::Minus => Object::Integer(left.wrapping_sub(right)),
        Operator::Asterisk => Object::Integer(left.wrapping_mul(right)),
        Operator::Slash => {
            if right == 0 {
                return Err(EvalError::DivisionByZero);
            }
            Object::Integer(left.wrapping_div(right))
        }
        Operator::LT => Object::Boolean(left < right),
        Operator::GT => Object::Boolean(left > right),
        Operator::Eq => Object::Boolean(left == right),
        Operator::NotEq => Object::Boolean(left != right),
        op => return Err(EvalError::binary_op_error("INTEGER", op, "INTEGER")),
    })
}

fn eval_boolean_infix_expression(operator: Operator, left: bool, right: bool) -> Result<Object> {
    match operator {
        Operator::Eq => Ok(Object::Boolean(left == right)),
        Operator::NotEq => Ok(Object::Boolean(left != right)),
        op => Err(EvalError::binary_op_error("BOOLEAN", op, "BOOLEAN")),
    }
}
