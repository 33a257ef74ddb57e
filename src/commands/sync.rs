//! The cross-reference half of a run.

use super::write_out;
use crate::audit::{CrossReference, FileAudit};
use crate::cli::Cli;
use crate::config::Config;
use crate::context::ProjectContext;
use crate::error::{AuditError, Result};
use crate::report::{self, ReportOptions};
use std::io::Write;
use tracing::{info, warn};

/// Run the cross-reference pass.
///
/// The outer error is a setup failure; the inner result is the pass itself,
/// whose tree-level failures are reported rather than propagated.
pub(crate) fn audit_trees(
    ctx: &ProjectContext,
    config: &Config,
    cli: &Cli,
) -> Result<Result<Vec<FileAudit>>> {
    let pass = CrossReference::from_config(config, &ctx.root)?;
    Ok(pass.run(cli.auto_update))
}

/// Print the outcome of a cross-reference pass.
///
/// A missing or unlistable tree is reported in place of the per-file listing;
/// it does not fail the run.
pub(crate) fn report_sync<W: Write>(
    outcome: Result<Vec<FileAudit>>,
    cli: &Cli,
    out: &mut W,
) -> Result<()> {
    let records = match outcome {
        Ok(records) => records,
        Err(err @ (AuditError::DirectoryNotFound { .. } | AuditError::Io { .. })) => {
            warn!(error = %err, "skipping cross-reference");
            return write_out(out, &format!("{}\n", err));
        }
        Err(err) => return Err(err),
    };

    let added = records.iter().filter(|r| r.added).count();
    info!(files = records.len(), added, "cross-reference complete");

    let options = ReportOptions {
        show_all: cli.show_all,
        auto_update: cli.auto_update,
    };
    write_out(out, &report::render(&records, options))
}
