//! The URL extractor.

use super::declaration::{DeclarationFinder, RegexDeclarationFinder};
use super::types::ExtractionResult;
use crate::error::{AuditError, Result};
use std::path::Path;
use tracing::debug;

/// Reserved binding that holds a definition module's example URL.
pub const URL_BINDING: &str = "url";

/// Extracts a unique canonical URL from definition module text.
pub struct UrlExtractor<F: DeclarationFinder = RegexDeclarationFinder> {
    finder: F,
}

impl UrlExtractor<RegexDeclarationFinder> {
    /// Extractor for `let url = "..."` declarations.
    pub fn new() -> Result<Self> {
        Ok(Self::with_finder(RegexDeclarationFinder::for_binding(
            URL_BINDING,
        )?))
    }
}

impl<F: DeclarationFinder> UrlExtractor<F> {
    pub fn with_finder(finder: F) -> Self {
        Self { finder }
    }

    /// Scan `text` and classify the result. Pure; no side effects.
    pub fn extract(&self, text: &str) -> ExtractionResult {
        let declarations = self.finder.find_all(text);
        if declarations.len() > 1 {
            let offsets: Vec<usize> = declarations.iter().map(|d| d.offset).collect();
            debug!(?offsets, "multiple url declarations");
        }

        let values: Vec<&str> = declarations.iter().map(|d| d.value).collect();
        ExtractionResult::from_matches(&values)
    }

    /// Read `path` and extract from its contents.
    pub fn extract_file(&self, path: &Path) -> Result<ExtractionResult> {
        let text = std::fs::read_to_string(path).map_err(|e| AuditError::io(path, e))?;
        let result = self.extract(&text);
        debug!(
            file = %path.display(),
            matches = result.match_count,
            "extracted url declarations"
        );
        Ok(result)
    }
}
