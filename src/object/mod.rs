use crate::ast;
use crate::environment::Env;
use std::fmt::{self, Debug, Display, Formatter};
use std::rc::Rc;

mod eval_error;
pub use eval_error::EvalError;

pub type Result<T> = std::result::Result<T, EvalError>;

#[derive(Debug, Clone, PartialEq)]
pub enum Object {
    Function(FunctionObject),
    ReturnValue(Box<Object>),
    Error(EvalError),
    Integer(i64),
    Boolean(bool),
    Null,
}

impl Display for Object {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::Function(func) => write!(f, "{}", func),
            Self::ReturnValue(obj) => write!(f, "{}", obj),
            Self::Error(err) => write!(f, "ERROR: {}", err),
            Self::Integer(n) => write!(f, "{}", n),
            Self::Boolean(b) => write!(f, "{}", b),
            Self::Null => write!(f, "null"),
        }
    }
}

impl Default for Object {
    fn default() -> Self {
        Self::Null
    }
}

impl From<i64> for Object {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<bool> for Object {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

impl From<EvalError> for Object {
    fn from(err: EvalError) -> Self {
        Self::Error(err)
    }
}

impl From<FunctionObject> for Object {
    fn from(func: FunctionObject) -> Self {
        Self::Function(func)
    }
}

impl Object {
    pub fn is_return_value(&self) -> bool {
        matches!(self, Self::ReturnValue(_))
    }

    pub fn unwrap_return(self) -> Self {
        match self {
            Self::ReturnValue(o) => *o,
            obj => obj,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Function(_) => "FUNCTION",
            Self::ReturnValue(_) => "RETURN_VALUE",
            Self::Error(_) => "ERROR",
            Self::Boolean(_) => "BOOLEAN",
            Self::Integer(_) => "INTEGER",
            Self::Null => "NULL",
        }
    }

    /// `false` and `null` are falsy, everything else is truthy.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Self::Boolean(false) | Self::Null)
    }
}

/// A closure over the environment that was active where the function
/// literal was evaluated.
#[derive(Clone)]
pub struct FunctionObject {
    pub parameters: Vec<ast::Identifier>,
    pub body: Rc<ast::BlockStatement>,
    pub env: Env,
}

// Identity, not structure: two closures are equal only if they came from the
// same literal in the same scope.
impl PartialEq for FunctionObject {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.body, &other.body) && Rc::ptr_eq(&self.env, &other.env)
    }
}

// The captured environment is left out: it usually contains this function.
impl Debug for FunctionObject {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("FunctionObject")
            .field("parameters", &self.parameters)
            .field("body", &self.body)
            .finish()
    }
}

impl Display for FunctionObject {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let identifier_names: Vec<String> = self
            .parameters
            .iter()
            .map(ast::Identifier::to_string)
            .collect();

        write!(f, "fn({}) {}", identifier_names.join(", "), self.body)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::environment::Environment;

    #[test]
    fn test_inspect() {
        let cases = vec![
            (Object::Integer(-12), "-12"),
            (Object::Boolean(true), "true"),
            (Object::Null, "null"),
            (Object::ReturnValue(Box::new(5.into())), "5"),
            (
                EvalError::IdentifierNotFound { id: "x".to_owned() }.into(),
                "ERROR: identifier not found: x",
            ),
        ];

        for (obj, inspected) in cases.into_iter() {
            assert_eq!(obj.to_string(), inspected);
        }
    }

    #[test]
    fn test_truthiness() {
        let cases = vec![
            (Object::Boolean(true), true),
            (Object::Boolean(false), false),
            (Object::Null, false),
            (Object::Integer(0), true),
            (Object::Integer(7), true),
        ];

        for (obj, truthy) in cases.into_iter() {
            assert_eq!(obj.is_truthy(), truthy, "{}", obj);
        }
    }

    #[test]
    fn test_function_identity() {
        let body = Rc::new(ast::BlockStatement::default());
        let env = Environment::new();
        let func = FunctionObject {
            parameters: vec!["x".into()],
            body: Rc::clone(&body),
            env: Rc::clone(&env),
        };

        assert_eq!(Object::from(func.clone()), Object::from(func.clone()));
        assert_eq!(func.to_string(), "fn(x) { }");

        let elsewhere = FunctionObject {
            env: Environment::new(),
            ..func.clone()
        };
        assert_ne!(Object::from(func), Object::from(elsewhere));
    }

    #[test]
    fn test_unwrap_return() {
        let wrapped = Object::ReturnValue(Box::new(Object::Integer(3)));
        assert!(wrapped.is_return_value());
        assert_eq!(wrapped.type_name(), "RETURN_VALUE");
        assert_eq!(wrapped.unwrap_return(), Object::Integer(3));
        assert_eq!(Object::Null.unwrap_return(), Object::Null);
    }
}
