//! The registry order half of a run.

use super::write_out;
use crate::cli::Cli;
use crate::config::Config;
use crate::context::ProjectContext;
use crate::error::Result;
use crate::registry::{OrderValidator, RegistryMarkers};
use std::io::Write;
use tracing::info;

/// Validate the registration list in `--src` or the configured registry file.
///
/// # Errors
///
/// * `AuditError::Io` - the registry file could not be read
/// * `AuditError::InvalidEntry` / `OrderViolation` / `UnterminatedBlock` - validation failed
pub fn cmd_check_order<W: Write>(
    ctx: &ProjectContext,
    config: &Config,
    cli: &Cli,
    out: &mut W,
) -> Result<()> {
    let path = match &cli.src {
        Some(src) => ctx.resolve_user_path(src),
        None => config.registry_file(&ctx.root),
    };

    let validator = OrderValidator::new(RegistryMarkers::from_config(config))?;
    let blocks = validator.validate_file(&path)?;

    let entries: usize = blocks.iter().map(|b| b.entries.len()).sum();
    info!(
        path = %path.display(),
        blocks = blocks.len(),
        entries,
        "registry order verified"
    );

    write_out(
        out,
        &format!("\nPuzzle list: ✅ {} entries in order\n", entries),
    )
}
