//! Command implementation for puzzle-audit.
//!
//! A run has two independent halves, executed in order:
//!
//! 1. Cross-reference: report (and optionally fix) backend modules against
//!    their definition modules. A missing or unlistable tree is reported and the half is
//!    abandoned; the run continues.
//! 2. Order check: validate the registration list. Any problem here is
//!    fatal and becomes the process exit status.

mod order;
mod sync;


use crate::audit::FileAudit;
use crate::cli::Cli;
use crate::config::Config;
use crate::context::ProjectContext;
use crate::error::{AuditError, Result};
use std::io::Write;

pub use order::cmd_check_order;

/// Execute a run from the current working directory, printing to stdout.
pub fn dispatch(cli: Cli) -> Result<()> {
    let ctx = ProjectContext::resolve()?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run(&ctx, &cli, &mut out)
}

/// Execute a run for `ctx`, writing the report to `out`.
pub fn run<W: Write>(ctx: &ProjectContext, cli: &Cli, out: &mut W) -> Result<()> {
    let config = ctx.load_config()?;
    let outcome = sync::audit_trees(ctx, &config, cli)?;
    finish_run(ctx, &config, cli, outcome, out)
}

/// Report a cross-reference outcome, then check registry order.
fn finish_run<W: Write>(
    ctx: &ProjectContext,
    config: &Config,
    cli: &Cli,
    outcome: Result<Vec<FileAudit>>,
    out: &mut W,
) -> Result<()> {
    sync::report_sync(outcome, cli, out)?;
    cmd_check_order(ctx, config, cli, out)
}

pub(crate) fn write_out<W: Write>(out: &mut W, text: &str) -> Result<()> {
    out.write_all(text.as_bytes())
        .and_then(|()| out.flush())
        .map_err(|e| AuditError::io("<stdout>", e))
}
