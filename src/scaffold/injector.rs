//! Idempotent scaffold injection into backend modules.

use super::fragment::Scaffold;
use crate::error::{AuditError, Result};
use crate::fs::atomic_write_file;
use std::path::Path;
use tracing::{debug, info};

/// Result of one injection attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InjectOutcome {
    /// The scaffold was appended and the file rewritten.
    Added,
    /// The module already declares the test; nothing was written.
    NotAdded,
}

/// Appends a [`Scaffold`] to modules that do not yet have one.
#[derive(Debug, Clone)]
pub struct TestStubInjector {
    scaffold: Scaffold,
}

impl TestStubInjector {
    pub fn new(scaffold: Scaffold) -> Self {
        Self { scaffold }
    }

    /// Injector using [`Scaffold::standard`].
    pub fn standard() -> Result<Self> {
        Ok(Self::new(Scaffold::standard()?))
    }

    /// Whether `text` already carries the scaffold's test function.
    pub fn has_test(&self, text: &str) -> bool {
        self.scaffold.is_present(text)
    }

    /// Compute the updated module text, or `None` if a test already exists.
    ///
    /// Trailing whitespace of the original is trimmed and the rendered block
    /// follows after a single newline.
    pub fn inject(&self, text: &str, url: &str) -> Option<String> {
        if self.has_test(text) {
            return None;
        }

        let mut updated = String::with_capacity(text.len() + 512);
        updated.push_str(text.trim_end());
        updated.push('\n');
        updated.push_str(&self.scaffold.render(url));
        Some(updated)
    }

    /// Read `path`, inject if needed, and replace the file's contents.
    ///
    /// # Errors
    ///
    /// * `AuditError::Io` - the module could not be read or written
    pub fn inject_file(&self, path: &Path, url: &str) -> Result<InjectOutcome> {
        let text = std::fs::read_to_string(path).map_err(|e| AuditError::io(path, e))?;

        match self.inject(&text, url) {
            None => {
                debug!(file = %path.display(), "scaffold already present");
                Ok(InjectOutcome::NotAdded)
            }
            Some(updated) => {
                atomic_write_file(path, &updated)?;
                info!(file = %path.display(), url, "appended test scaffold");
                Ok(InjectOutcome::Added)
            }
        }
    }
}
