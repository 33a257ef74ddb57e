//! Error types for the puzzle-audit CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for puzzle-audit operations.
///
/// Per-file variants (`Io`, `DirectoryNotFound`) are normally caught and
/// reported by the cross-reference pass. Registry variants are fatal.
#[derive(Error, Debug)]
pub enum AuditError {
    /// Invalid configuration or environment.
    #[error("{0}")]
    UserError(String),

    /// A source tree directory does not exist.
    #[error("{label} directory not found: {}", path.display())]
    DirectoryNotFound { label: String, path: PathBuf },

    /// Reading or writing a single file failed.
    #[error("failed to access '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A registry line inside the block is not a `(identifier, ...)` entry.
    #[error("invalid line in puzzle list (line {line}): {content}")]
    InvalidEntry { line: usize, content: String },

    /// Two registry entries are not in strictly ascending order.
    #[error("puzzles are not in order: {previous} >= {current} (line {line})")]
    OrderViolation {
        previous: String,
        current: String,
        line: usize,
    },

    /// A registry block was opened but never closed.
    #[error("puzzle list opened at line {line} is never closed")]
    UnterminatedBlock { line: usize },
}

impl AuditError {
    /// Wrap an I/O error with the path it occurred on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AuditError::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            AuditError::UserError(_) => exit_codes::USER_ERROR,
            AuditError::DirectoryNotFound { .. } => exit_codes::USER_ERROR,
            AuditError::Io { .. } => exit_codes::USER_ERROR,
            AuditError::InvalidEntry { .. } => exit_codes::VALIDATION_FAILURE,
            AuditError::OrderViolation { .. } => exit_codes::VALIDATION_FAILURE,
            AuditError::UnterminatedBlock { .. } => exit_codes::VALIDATION_FAILURE,
        }
    }
}

/// Result type alias for puzzle-audit operations.
pub type Result<T> = std::result::Result<T, AuditError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_error_has_correct_exit_code() {
        let err = AuditError::UserError("bad config".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn per_file_errors_are_user_errors() {
        let err = AuditError::DirectoryNotFound {
            label: "Backend".to_string(),
            path: PathBuf::from("missing"),
        };
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);

        let err = AuditError::io(
            "akari.rs",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn registry_errors_are_validation_failures() {
        let err = AuditError::OrderViolation {
            previous: "heyawake".to_string(),
            current: "akari".to_string(),
            line: 2,
        };
        assert_eq!(err.exit_code(), exit_codes::VALIDATION_FAILURE);

        let err = AuditError::InvalidEntry {
            line: 4,
            content: "oops".to_string(),
        };
        assert_eq!(err.exit_code(), exit_codes::VALIDATION_FAILURE);

        let err = AuditError::UnterminatedBlock { line: 1 };
        assert_eq!(err.exit_code(), exit_codes::VALIDATION_FAILURE);
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = AuditError::OrderViolation {
            previous: "heyawake".to_string(),
            current: "akari".to_string(),
            line: 2,
        };
        assert_eq!(
            err.to_string(),
            "puzzles are not in order: heyawake >= akari (line 2)"
        );

        let err = AuditError::DirectoryNotFound {
            label: "Backend".to_string(),
            path: PathBuf::from("src/puzzle"),
        };
        assert_eq!(err.to_string(), "Backend directory not found: src/puzzle");
    }
}
