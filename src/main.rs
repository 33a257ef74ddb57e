//! puzzle-audit: keeps the puzzle definition and solver backend trees in sync.
//!
//! This is the main entry point for the `puzzle-audit` CLI. It parses
//! arguments, installs tracing, runs the cross-reference pass and the
//! registry order check, and maps errors to exit codes.

mod audit;
mod cli;
mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod exit_codes;
pub mod extract;
pub mod fs;
mod logging;
pub mod registry;
mod report;
pub mod scaffold;

#[cfg(test)]
mod test_support;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    logging::init();

    match commands::dispatch(cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
