use std::{fs, process::ExitCode};

use clap::Parser;
use keypad::{ERROR_INDICATOR, evaluate_expression, util::format::format_result};
use tracing_subscriber::EnvFilter;

/// keypad evaluates calculator expressions such as `(2+3)*4` or `√9+5!`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells keypad to look at a file instead of an expression. Every
    /// non-empty line of the file is evaluated on its own.
    #[arg(short, long)]
    file: bool,

    /// Prints the specific error instead of the generic indicator.
    #[arg(short, long)]
    detailed: bool,

    contents: String,
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(std::io::stderr)
                             .init();

    let args = Args::parse();

    let script = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(script) => script,
            Err(e) => {
                eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist? ({e})",
                          &args.contents);
                return ExitCode::FAILURE;
            },
        }
    } else {
        args.contents
    };

    let mut failed = false;

    for expression in script.lines().map(str::trim).filter(|line| !line.is_empty()) {
        match evaluate_expression(expression) {
            Ok(value) => println!("{}", format_result(value)),
            Err(e) => {
                failed = true;
                if args.detailed {
                    println!("{e}");
                } else {
                    println!("{ERROR_INDICATOR}");
                }
            },
        }
    }

    if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}
