//! Strict-order validation of registration lists.

use super::types::{RegistryBlock, RegistryEntry, RegistryMarkers};
use crate::error::{AuditError, Result};
use regex::Regex;
use std::path::Path;
use tracing::debug;

/// Leading `(identifier,` of a registration entry.
const ENTRY_PATTERN: &str = r"^\s*\(([a-z_]+),";

/// Parses registration blocks and enforces strictly ascending identifiers.
#[derive(Debug, Clone)]
pub struct OrderValidator {
    markers: RegistryMarkers,
    entry: Regex,
}

impl OrderValidator {
    pub fn new(markers: RegistryMarkers) -> Result<Self> {
        let entry = Regex::new(ENTRY_PATTERN)
            .map_err(|e| AuditError::UserError(format!("invalid entry pattern: {}", e)))?;
        Ok(Self { markers, entry })
    }

    /// Validate every registration block in `text`.
    ///
    /// Lines are only inspected between a start marker and the next end
    /// marker. A later start marker opens a fresh block with its own order.
    ///
    /// # Errors
    ///
    /// * `AuditError::InvalidEntry` - a line inside a block is not an entry
    /// * `AuditError::OrderViolation` - an identifier is not greater than its predecessor
    /// * `AuditError::UnterminatedBlock` - input ends inside a block
    pub fn validate(&self, text: &str) -> Result<Vec<RegistryBlock>> {
        let mut blocks = Vec::new();
        let mut current: Option<RegistryBlock> = None;

        for (index, line) in text.lines().enumerate() {
            let line_number = index + 1;

            if line.starts_with(&self.markers.start) {
                current = Some(RegistryBlock {
                    start_line: line_number,
                    ..Default::default()
                });
                continue;
            }

            let Some(block) = current.as_mut() else {
                continue;
            };

            if line.starts_with(&self.markers.end) {
                block.end_line = line_number;
                debug!(
                    start = block.start_line,
                    end = block.end_line,
                    entries = block.entries.len(),
                    "registry block is ordered"
                );
                blocks.extend(current.take());
                continue;
            }

            let identifier = self.parse_entry(line, line_number)?;
            if let Some(previous) = block.entries.last()
                && previous.identifier.as_str() >= identifier
            {
                debug!(
                    previous_line = previous.source_line,
                    line = line_number,
                    "registry entries out of order"
                );
                return Err(AuditError::OrderViolation {
                    previous: previous.identifier.clone(),
                    current: identifier.to_string(),
                    line: line_number,
                });
            }

            block.entries.push(RegistryEntry {
                identifier: identifier.to_string(),
                source_line: line_number,
            });
        }

        if let Some(block) = current {
            return Err(AuditError::UnterminatedBlock {
                line: block.start_line,
            });
        }

        Ok(blocks)
    }

    /// Read and validate the registry file at `path`.
    pub fn validate_file(&self, path: &Path) -> Result<Vec<RegistryBlock>> {
        let text = std::fs::read_to_string(path).map_err(|e| AuditError::io(path, e))?;
        self.validate(&text)
    }

    fn parse_entry<'l>(&self, line: &'l str, line_number: usize) -> Result<&'l str> {
        self.entry
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
            .ok_or_else(|| AuditError::InvalidEntry {
                line: line_number,
                content: line.trim().to_string(),
            })
    }
}
