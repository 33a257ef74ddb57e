//! Cross-reference pass over the backend and definition trees.
//!
//! Backend and definition modules are paired purely by filename. For each
//! backend module the pass records whether it already has a regression test
//! and what the paired definition declares as its URL. In update mode, a
//! module with a unique URL and no test receives a scaffold.
//!
//! Every per-file failure is captured in that file's record; only a missing
//! tree aborts the pass.

mod types;


pub use types::{FileAudit, UrlOutcome};

use crate::config::Config;
use crate::error::{AuditError, Result};
use crate::extract::UrlExtractor;
use crate::fs::{FileScanner, ScannedFile};
use crate::scaffold::{InjectOutcome, TestStubInjector};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Drives scanning, extraction, and injection for one pair of trees.
pub struct CrossReference {
    scanner: FileScanner,
    extractor: UrlExtractor,
    injector: TestStubInjector,
    backend_dir: PathBuf,
    definitions_dir: PathBuf,
}

impl CrossReference {
    /// Build a pass for the trees configured under `root`.
    pub fn from_config(config: &Config, root: &Path) -> Result<Self> {
        Ok(Self {
            scanner: FileScanner::new(&config.extension, &config.ignored_files)?,
            extractor: UrlExtractor::new()?,
            injector: TestStubInjector::standard()?,
            backend_dir: config.backend_path(root),
            definitions_dir: config.definitions_path(root),
        })
    }

    /// Audit every backend module, injecting scaffolds when `auto_update` is set.
    ///
    /// # Errors
    ///
    /// * `AuditError::DirectoryNotFound` - either tree is missing
    /// * `AuditError::Io` - the backend directory listing failed
    pub fn run(&self, auto_update: bool) -> Result<Vec<FileAudit>> {
        let backend_files = self.scanner.scan(&self.backend_dir, "Backend")?;
        if !self.definitions_dir.is_dir() {
            return Err(AuditError::DirectoryNotFound {
                label: "Definitions".to_string(),
                path: self.definitions_dir.clone(),
            });
        }

        Ok(backend_files
            .iter()
            .map(|file| self.audit_file(file, auto_update))
            .collect())
    }

    fn audit_file(&self, file: &ScannedFile, auto_update: bool) -> FileAudit {
        let mut record = FileAudit::new(&file.name);
        record.url = self.extract_url(&file.name);

        let backend_text = match std::fs::read_to_string(&file.path) {
            Ok(text) => text,
            Err(e) => {
                let err = AuditError::io(&file.path, e);
                warn!(file = %file.name, error = %err, "skipping unreadable backend module");
                record.error = Some(err.to_string());
                return record;
            }
        };
        record.has_test = self.injector.has_test(&backend_text);

        if auto_update
            && !record.has_test
            && let Some(url) = record.url.url()
        {
            match self.injector.inject_file(&file.path, url) {
                Ok(InjectOutcome::Added) => {
                    record.added = true;
                    record.has_test = true;
                }
                Ok(InjectOutcome::NotAdded) => {}
                Err(err) => {
                    warn!(file = %file.name, error = %err, "failed to append scaffold");
                    record.error = Some(err.to_string());
                }
            }
        }

        debug!(
            file = %file.name,
            has_test = record.has_test,
            added = record.added,
            "audited backend module"
        );
        record
    }

    fn extract_url(&self, name: &str) -> UrlOutcome {
        let definition = self.definitions_dir.join(name);
        if !definition.is_file() {
            return UrlOutcome::DefinitionMissing;
        }

        match self.extractor.extract_file(&definition) {
            Ok(result) => UrlOutcome::Extracted(result),
            Err(err) => {
                warn!(file = %name, error = %err, "failed to read definition module");
                UrlOutcome::Unreadable(err.to_string())
            }
        }
    }
}
