use clap::Parser;
use minforth::runtime::{
    built_ins::base_words::register_base_words,
    error,
    interpreter::{Interpreter, WordManagement, forth_interpreter::ForthInterpreter},
};
use std::{
    io::{stdin, IsTerminal},
    path::PathBuf,
    process::ExitCode,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// A minimal interactive Forth interpreter.
#[derive(Parser)]
#[command(name = "minforth", version)]
#[command(about = "A minimal interactive Forth interpreter")]
struct Args {
    /// Source file to run instead of reading from standard input
    path: Option<PathBuf>,

    /// Log level, or a full filter directive.  RUST_LOG takes precedence when set
    #[arg(long, default_value = "warn")]
    log_level: String,
}

/// Send the diagnostic log to standard error so it never mixes with what scripts print.
fn init_logging(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(interpreter: &mut dyn Interpreter, path: Option<&PathBuf>) -> error::Result<()> {
    match path {
        Some(path) => interpreter.process_source_file(&path.to_string_lossy()),

        None => {
            let input = stdin();
            info!(interactive = input.is_terminal(), "Reading from standard input.");

            interpreter.process_reader("<stdin>", &mut input.lock())
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    init_logging(&args.log_level);

    // Create the interpreter and register the built-in words before any source is read.
    let mut interpreter = ForthInterpreter::new();
    register_base_words(&mut interpreter);

    info!(words = interpreter.dictionary().len(), "Registered the built-in words.");

    match run(&mut interpreter, args.path.as_ref()) {
        Ok(()) => ExitCode::SUCCESS,

        Err(script_error) => {
            error!(error = %script_error, "Session ended with an error.");
            eprintln!("Error: {}", script_error);

            ExitCode::FAILURE
        }
    }
}
