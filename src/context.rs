//! Project root resolution for puzzle-audit.
//!
//! The tool may be invoked from anywhere inside the project. The root is the
//! nearest ancestor (including the working directory) that holds the config
//! file, else the nearest that holds the default backend tree, else the
//! working directory itself.

use crate::config::{CONFIG_FILE_NAME, Config};
use crate::error::{AuditError, Result};
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Resolved project paths. All paths are absolute when resolved from an
/// absolute working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectContext {
    /// Project root against which configured paths resolve.
    pub root: PathBuf,
    /// Working directory the tool was invoked from.
    pub cwd: PathBuf,
}

impl ProjectContext {
    /// Resolve the project context from the current working directory.
    pub fn resolve() -> Result<Self> {
        let cwd = env::current_dir().map_err(|e| {
            AuditError::UserError(format!("failed to get current working directory: {}", e))
        })?;

        Ok(Self::resolve_from(cwd))
    }

    /// Resolve the project context from a specific directory.
    pub fn resolve_from<P: AsRef<Path>>(cwd: P) -> Self {
        let cwd = cwd.as_ref().to_path_buf();
        let default_backend = Config::default().backend_dir;

        let root = cwd
            .ancestors()
            .find(|dir| dir.join(CONFIG_FILE_NAME).is_file())
            .or_else(|| {
                cwd.ancestors()
                    .find(|dir| dir.join(&default_backend).is_dir())
            })
            .unwrap_or(cwd.as_path())
            .to_path_buf();

        debug!(root = %root.display(), "resolved project root");
        Self { root, cwd }
    }

    /// Path of the (possibly absent) config file.
    pub fn config_path(&self) -> PathBuf {
        self.root.join(CONFIG_FILE_NAME)
    }

    /// Load the project's config, falling back to defaults when absent.
    pub fn load_config(&self) -> Result<Config> {
        Config::load_or_default(self.config_path())
    }

    /// Resolve a user-supplied path against the working directory.
    pub fn resolve_user_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.cwd.join(path)
        }
    }
}
