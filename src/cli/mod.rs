//! CLI argument parsing for puzzle-audit.
//!
//! Uses clap derive macros for declarative argument definitions. There are
//! no subcommands; a run always cross-references the puzzle trees and then
//! checks the registration list order.

use clap::Parser;
use std::path::PathBuf;

/// Keep puzzle definitions and solver backends in sync.
///
/// For every backend puzzle module, reports whether it has a `test_solve()`
/// regression test and whether the matching definition module declares a
/// unique `let url = "..."`. Then checks that the `puzzle_list!` registration
/// list is in strictly ascending order.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "puzzle-audit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Append a test_solve() scaffold to backend modules that lack one.
    #[arg(long)]
    pub auto_update: bool,

    /// Also list modules that already have test_solve().
    #[arg(long)]
    pub show_all: bool,

    /// Registry file to check instead of the configured one.
    #[arg(long, value_name = "PATH")]
    pub src: Option<PathBuf>,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
