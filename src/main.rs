//! diffparse: turn unified diff output into structured JSON.
//!
//! This is the entry point for the `diffparse` binary. It parses arguments,
//! runs the parse and maps errors to exit codes.

mod cli;
mod commands;

use cli::Cli;
use diffparse::exit_codes;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse_args();

    match commands::run(&cli) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{}", output);
            }
            ExitCode::from(exit_codes::SUCCESS as u8)
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
