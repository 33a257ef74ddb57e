//! Plain-text report of a cross-reference pass.
//!
//! The format is meant for people, not scripts, and is not versioned.

use crate::audit::{FileAudit, UrlOutcome};
use crate::extract::UrlStatus;
use crate::scaffold::TEST_FN_NAME;
use std::fmt::Write;

const RULE_WIDTH: usize = 80;

/// Report display options.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportOptions {
    /// Include modules that already had a test and were not changed.
    pub show_all: bool,
    /// Append the summary of updated files.
    pub auto_update: bool,
}

/// Whether a record appears in the report.
///
/// Modules that already had a test and were left untouched are hidden unless
/// `show_all` is set.
pub fn is_shown(record: &FileAudit, options: ReportOptions) -> bool {
    options.show_all || !record.has_test || record.added
}

/// Render the full report.
pub fn render(records: &[FileAudit], options: ReportOptions) -> String {
    let mut out = String::new();
    let _ = write_report(&mut out, records, options);
    out
}

fn write_report(
    out: &mut String,
    records: &[FileAudit],
    options: ReportOptions,
) -> std::fmt::Result {
    writeln!(out, "Backend Puzzle Files - URL Extraction Results")?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;

    for record in records.iter().filter(|r| is_shown(r, options)) {
        write_record(out, record)?;
    }

    let updated: Vec<&str> = records
        .iter()
        .filter(|r| r.added)
        .map(|r| r.name.as_str())
        .collect();

    if options.auto_update && !updated.is_empty() {
        writeln!(out)?;
        writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
        writeln!(
            out,
            "✅ Added {}() to {} file(s):",
            TEST_FN_NAME,
            updated.len()
        )?;
        for name in updated {
            writeln!(out, "  - {}", name)?;
        }
    }

    Ok(())
}

fn write_record(out: &mut String, record: &FileAudit) -> std::fmt::Result {
    writeln!(out)?;
    writeln!(out, "{}:", record.name)?;

    let test_status = if record.added {
        "✅ Added automatically"
    } else if record.has_test {
        "✅ Implemented"
    } else {
        "❌ Not found"
    };
    writeln!(out, "  {}(): {}", TEST_FN_NAME, test_status)?;

    match &record.url {
        UrlOutcome::Extracted(result) => match (&result.url, result.status()) {
            (Some(url), _) => {
                writeln!(out, "  URL: ✅ {}", UrlStatus::Found.describe())?;
                writeln!(out, "       {}", url)?;
            }
            (None, status) => {
                writeln!(
                    out,
                    "  URL: ❌ {} ({} matches)",
                    status.describe(),
                    result.match_count
                )?;
            }
        },
        UrlOutcome::DefinitionMissing => {
            writeln!(out, "  URL: ❌ File not found in definitions tree")?;
        }
        UrlOutcome::Unreadable(reason) => {
            writeln!(out, "  URL: ❌ {}", reason)?;
        }
    }

    if let Some(error) = &record.error {
        writeln!(out, "  Error: {}", error)?;
    }

    Ok(())
}
