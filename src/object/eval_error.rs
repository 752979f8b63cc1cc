use crate::ast;
use custom_error::custom_error;

custom_error! {
    #[derive(Clone, PartialEq)]
    pub EvalError

    IdentifierNotFound{id: String} = "identifier not found: {id}",
    UnknownPrefixOperator{operator: ast::Operator, operand: &'static str} = "unknown operator: {operator}{operand}",
    UnknownInfixOperator{left: &'static str, operator: ast::Operator, right: &'static str} = "unknown operator: {left} {operator} {right}",
    TypeMismatch{left: &'static str, operator: ast::Operator, right: &'static str} = "type mismatch: {left} {operator} {right}",
    NotAFunction{type_name: &'static str} = "not a function: {type_name}",
    IncorrectArity{got: usize, want: usize} = "wrong number of arguments. got={got}, want={want}",
    DivisionByZero = "division by zero",
}

impl EvalError {
    pub fn binary_op_error(
        left: &'static str,
        operator: ast::Operator,
        right: &'static str,
    ) -> Self {
        if left == right {
            Self::UnknownInfixOperator {
                left,
                operator,
                right,
            }
        } else {
            Self::TypeMismatch {
                left,
                operator,
                right,
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_binary_op_error() {
        assert_eq!(
            EvalError::binary_op_error("INTEGER", ast::Operator::Plus, "BOOLEAN").to_string(),
            "type mismatch: INTEGER + BOOLEAN"
        );
        assert_eq!(
            EvalError::binary_op_error("BOOLEAN", ast::Operator::Plus, "BOOLEAN").to_string(),
            "unknown operator: BOOLEAN + BOOLEAN"
        );
    }

    #[test]
    fn test_messages() {
        let cases = vec![
            (
                EvalError::IdentifierNotFound {
                    id: "foobar".to_owned(),
                },
                "identifier not found: foobar",
            ),
            (
                EvalError::UnknownPrefixOperator {
                    operator: ast::Operator::Minus,
                    operand: "BOOLEAN",
                },
                "unknown operator: -BOOLEAN",
            ),
            (
                EvalError::NotAFunction {
                    type_name: "INTEGER",
                },
                "not a function: INTEGER",
            ),
            (
                EvalError::IncorrectArity { got: 1, want: 2 },
                "wrong number of arguments. got=1, want=2",
            ),
            (EvalError::DivisionByZero, "division by zero"),
        ];

        for (error, message) in cases.into_iter() {
            assert_eq!(error.to_string(), message);
        }
    }
}
