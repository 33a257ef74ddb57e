//! Config struct definition and default implementation.

use super::types::*;
use serde::Deserialize;

/// Configuration for a puzzle-audit run.
///
/// This struct represents the contents of `.puzzle-audit.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
/// Relative paths are resolved against the project root.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Source trees
    // =========================================================================
    /// Directory holding one backend module per puzzle.
    #[serde(default = "default_backend_dir")]
    pub backend_dir: String,

    /// Directory holding one definition module per puzzle.
    #[serde(default = "default_definitions_dir")]
    pub definitions_dir: String,

    /// File extension of puzzle modules (no leading dot).
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Filename glob patterns skipped when scanning the backend tree.
    #[serde(default = "default_ignored_files")]
    pub ignored_files: Vec<String>,

    // =========================================================================
    // Registry
    // =========================================================================
    /// File containing the puzzle registration list.
    #[serde(default = "default_registry_path")]
    pub registry_path: String,

    /// Line prefix that opens the registration list.
    #[serde(default = "default_registry_start_marker")]
    pub registry_start_marker: String,

    /// Line prefix that closes the registration list.
    #[serde(default = "default_registry_end_marker")]
    pub registry_end_marker: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_dir: default_backend_dir(),
            definitions_dir: default_definitions_dir(),
            extension: default_extension(),
            ignored_files: default_ignored_files(),
            registry_path: default_registry_path(),
            registry_start_marker: default_registry_start_marker(),
            registry_end_marker: default_registry_end_marker(),
        }
    }
}
