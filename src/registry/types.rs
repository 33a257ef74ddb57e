//! Registry data types.

use crate::config::Config;

/// One `(identifier, ...)` line of a registration list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryEntry {
    pub identifier: String,
    /// Line number in the source file (1-based).
    pub source_line: usize,
}

/// A delimited registration list and its entries in source order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RegistryBlock {
    /// Line of the start marker (1-based).
    pub start_line: usize,
    /// Line of the end marker (1-based).
    pub end_line: usize,
    pub entries: Vec<RegistryEntry>,
}

/// Line prefixes that open and close a registration list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryMarkers {
    pub start: String,
    pub end: String,
}

impl Default for RegistryMarkers {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl RegistryMarkers {
    pub fn from_config(config: &Config) -> Self {
        Self {
            start: config.registry_start_marker.clone(),
            end: config.registry_end_marker.clone(),
        }
    }
}
