//! Per-file audit records.

use crate::extract::ExtractionResult;

/// What the paired definition module yielded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlOutcome {
    /// The definition was read and scanned.
    Extracted(ExtractionResult),
    /// No definition module with the same filename exists.
    DefinitionMissing,
    /// The definition module exists but could not be read.
    Unreadable(String),
}

impl UrlOutcome {
    /// The canonical URL, if exactly one was declared.
    pub fn url(&self) -> Option<&str> {
        match self {
            UrlOutcome::Extracted(result) => result.url.as_deref(),
            _ => None,
        }
    }
}

/// Audit record for one backend module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileAudit {
    /// Bare filename shared by both trees.
    pub name: String,
    /// Whether the module declares `test_solve` (after any injection).
    pub has_test: bool,
    pub url: UrlOutcome,
    /// Whether a scaffold was appended during this run.
    pub added: bool,
    /// Read/write failure on the backend module, if any.
    pub error: Option<String>,
}

impl FileAudit {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            has_test: false,
            url: UrlOutcome::DefinitionMissing,
            added: false,
            error: None,
        }
    }
}
