use std::{env, process::ExitCode, time::Instant};

use relex::{
    display_error,
    lexer::{lexer::Lexer, tokens::ARITHMETIC_RULES},
};
use tracing::info;
use tracing_subscriber::EnvFilter;

const SAMPLE: &str = "erw = _abc + 12*(R4-623902)  ";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() > 2 {
        eprintln!("Usage: {} [input]", args[0]);
        return ExitCode::FAILURE;
    }

    let source = args.get(1).map(String::as_str).unwrap_or(SAMPLE);

    let lexer = match Lexer::new(ARITHMETIC_RULES.iter().copied()) {
        Ok(lexer) => lexer,
        Err(err) => {
            eprintln!("Error: {} ({})", err.get_error_name(), err);
            return ExitCode::FAILURE;
        }
    };

    let start = Instant::now();

    for token in lexer.tokens(source) {
        match token {
            Ok(token) => println!("{}", token),
            Err(err) => {
                println!("LexerError at position {}", err.position);
                display_error(&err, source, "input");
                return ExitCode::FAILURE;
            }
        }
    }

    info!("tokenized in {:?}", start.elapsed());

    ExitCode::SUCCESS
}
