use monkey_treewalk::repl;
use std::env;
use std::io;
use std::process;

// Logging stays off unless RUST_LOG is set, and goes to stderr so it never
// interleaves with REPL output.
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(io::stderr).with_target(true))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn main() {
    init_tracing();

    println!("Hello! This is the Monkey programming language!");
    println!("Feel free to type in commands");

    let stdin = io::stdin();
    if let Err(err) = repl::start(stdin.lock(), io::stdout()) {
        eprintln!("{}", err);
        process::exit(1);
    }
}
