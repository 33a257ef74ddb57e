//! Configuration model for puzzle-audit.
//!
//! This module defines the Config struct that represents `.puzzle-audit.yaml`
//! at the project root. It supports forward-compatible YAML parsing (unknown
//! fields are ignored), defaults matching the cspuz repository layout, and
//! validation of config values.

mod model;
mod operations;
pub mod types;

#[cfg(test)]
mod tests;

pub use model::Config;
pub use types::CONFIG_FILE_NAME;
