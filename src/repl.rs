use crate::environment::Environment;
use crate::evaluator;
use crate::lexer::Lexer;
use crate::object::Object;
use crate::parser::Parser;
use std::io::{self, BufRead, Write};
use tracing::debug;

static PROMPT: &str = ">> ";

/// Runs a session until `input` is exhausted. Bindings made on one line stay
/// visible to every later line.
pub fn start<R: BufRead, W: Write>(input: R, mut output: W) -> io::Result<()> {
    let env = Environment::new();
    let mut lines = input.lines();

    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => return Ok(()),
        };

        match Parser::new(Lexer::new(line)).parse_program() {
            Err(errors) => {
                debug!(count = errors.len(), "skipping evaluation after syntax errors");
                for err in errors.iter() {
                    writeln!(output, "\t{}", err)?;
                }
            }
            Ok(program) => {
                let evaluated = evaluator::eval(&program, &env)
                    .unwrap_or_else(|err| Some(Object::from(err)));
                if let Some(val) = evaluated {
                    writeln!(output, "{}", val)?;
                }
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn run(input: &str) -> String {
        let mut output = Vec::new();
        start(input.as_bytes(), &mut output).expect("session failed");
        String::from_utf8(output).expect("output is not utf-8")
    }

    #[test]
    fn test_prints_values() {
        assert_eq!(run("1 + 2\n"), ">> 3\n>> ");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(run(""), ">> ");
    }
}
