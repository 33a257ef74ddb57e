//! Declaration finding over module source text.

use crate::error::{AuditError, Result};
use regex::Regex;

/// A single `let <name> = "<value>"` binding found in source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration<'t> {
    /// The string literal contents (without quotes).
    pub value: &'t str,
    /// Byte offset of the declaration within the text.
    pub offset: usize,
}

/// Finds every declaration of a reserved binding in a piece of source text.
pub trait DeclarationFinder {
    /// All non-overlapping declarations, in source order.
    fn find_all<'t>(&self, text: &'t str) -> Vec<Declaration<'t>>;
}

/// Regex-backed finder for `let <name> = "<literal>"`.
pub struct RegexDeclarationFinder {
    regex: Regex,
    name: String,
}

impl std::fmt::Debug for RegexDeclarationFinder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegexDeclarationFinder")
            .field("name", &self.name)
            .field("pattern", &self.regex.as_str())
            .finish()
    }
}

impl RegexDeclarationFinder {
    /// Build a finder for the binding `name`.
    ///
    /// The name is escaped, so only plain identifiers are meaningful here.
    pub fn for_binding(name: &str) -> Result<Self> {
        let pattern = format!(r#"\blet\s+{}\s*=\s*"([^"]+)""#, regex::escape(name));
        let regex = Regex::new(&pattern).map_err(|e| {
            AuditError::UserError(format!(
                "invalid declaration pattern for '{}': {}",
                name, e
            ))
        })?;

        Ok(Self {
            regex,
            name: name.to_string(),
        })
    }
}

impl DeclarationFinder for RegexDeclarationFinder {
    fn find_all<'t>(&self, text: &'t str) -> Vec<Declaration<'t>> {
        self.regex
            .captures_iter(text)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                let value = caps.get(1)?;
                Some(Declaration {
                    value: value.as_str(),
                    offset: whole.start(),
                })
            })
            .collect()
    }
}
