pub mod ast;
mod environment;
pub mod evaluator;
mod lexer;
mod object;
mod parser;
pub mod repl;
mod token;

pub use environment::{Env, Environment};
pub use lexer::Lexer;
pub use object::{EvalError, FunctionObject, Object};
pub use parser::{ParseError, Parser};
pub use token::{Token, TokenType};
