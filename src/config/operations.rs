//! Config loading, validation, and utility operations.

use super::model::Config;
use crate::error::{AuditError, Result};
use globset::Glob;
use std::path::{Path, PathBuf};

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(AuditError::UserError)` - Read error, parse error, or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            AuditError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Load config from `path` if it exists, otherwise return the defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.is_file() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| AuditError::UserError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `extension` must be non-empty and have no leading dot
    /// - registry markers must be non-empty and distinct
    /// - every `ignored_files` entry must be a valid glob
    pub fn validate(&self) -> Result<()> {
        if self.extension.is_empty() {
            return Err(AuditError::UserError(
                "config validation failed: extension must be non-empty".to_string(),
            ));
        }
        if self.extension.starts_with('.') {
            return Err(AuditError::UserError(format!(
                "config validation failed: extension must not have a leading dot (found '{}'). Use '{}' instead.",
                self.extension,
                self.extension.trim_start_matches('.')
            )));
        }

        if self.registry_start_marker.is_empty() || self.registry_end_marker.is_empty() {
            return Err(AuditError::UserError(
                "config validation failed: registry markers must be non-empty".to_string(),
            ));
        }
        if self.registry_start_marker == self.registry_end_marker {
            return Err(AuditError::UserError(
                "config validation failed: registry_start_marker and registry_end_marker must differ"
                    .to_string(),
            ));
        }

        for pattern in &self.ignored_files {
            Glob::new(pattern).map_err(|e| {
                AuditError::UserError(format!(
                    "config validation failed: invalid glob in ignored_files: '{}' - {}",
                    pattern, e
                ))
            })?;
        }

        Ok(())
    }

    /// Absolute backend tree path under `root`.
    pub fn backend_path(&self, root: &Path) -> PathBuf {
        root.join(&self.backend_dir)
    }

    /// Absolute definition tree path under `root`.
    pub fn definitions_path(&self, root: &Path) -> PathBuf {
        root.join(&self.definitions_dir)
    }

    /// Absolute registry file path under `root`.
    pub fn registry_file(&self, root: &Path) -> PathBuf {
        root.join(&self.registry_path)
    }
}
