use clap::{Parser, Subcommand};
use regex_validator::programs::{self, end_of_input_is_ok};
use regex_validator::prompt;
use std::process::ExitCode;
use tracing::{error, Level};

/// Interactive validators for names, numbers, titles and feedback
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Log debug details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    program: Program,
}

#[derive(Subcommand, Debug, Clone, Copy)]
enum Program {
    /// Validate and capitalize "First Middle Last" names
    Name,
    /// Check that input is an integer or decimal number
    Float,
    /// Correct the capitalization of a book title
    Title,
    /// Collect and clean up feedback phrases
    Feedback,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = if args.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let mut p = prompt::stdio();
    let result = match args.program {
        Program::Name => programs::run_name(&mut p),
        Program::Float => programs::run_float(&mut p),
        Program::Title => programs::run_title(&mut p),
        Program::Feedback => programs::run_feedback(&mut p),
    };

    match end_of_input_is_ok(result) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
