use monkey_treewalk::{evaluator::eval, Environment, Lexer, Parser};
use std::time::Instant;

static INPUT: &str = "let fibonacci = fn(x) {
if (x == 0) { 0
     } else {
       if (x == 1) {
         return 1;
       } else {
         fibonacci(x - 1) + fibonacci(x - 2);
       }
} };
   fibonacci(25);";

fn main() {
    let program = Parser::new(Lexer::new(INPUT))
        .parse_program()
        .expect("Parse errors found");

    let env = Environment::new();
    let start = Instant::now();
    let result = eval(&program, &env).expect("Evaluation failed");
    let duration = start.elapsed();

    println!(
        "engine=eval, result={}, duration={}",
        result.unwrap_or_default(),
        duration.as_secs_f64(),
    );
}
