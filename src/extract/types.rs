//! Extraction result types.

/// Outcome of scanning one definition module for its canonical URL.
///
/// `url` is `Some` exactly when `match_count == 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionResult {
    pub url: Option<String>,
    pub match_count: usize,
}

/// Classification of an [`ExtractionResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlStatus {
    /// Exactly one declaration.
    Found,
    /// No declaration.
    Absent,
    /// More than one declaration; the canonical one cannot be chosen.
    Ambiguous,
}

impl ExtractionResult {
    /// Build a result from every value found, keeping the URL only when unique.
    pub fn from_matches(values: &[&str]) -> Self {
        let url = match values {
            [only] => Some((*only).to_string()),
            _ => None,
        };
        Self {
            url,
            match_count: values.len(),
        }
    }

    pub fn status(&self) -> UrlStatus {
        match self.match_count {
            0 => UrlStatus::Absent,
            1 => UrlStatus::Found,
            _ => UrlStatus::Ambiguous,
        }
    }
}

impl UrlStatus {
    /// Human-readable status, as shown in the report.
    pub fn describe(self) -> &'static str {
        match self {
            UrlStatus::Found => "Found",
            UrlStatus::Absent | UrlStatus::Ambiguous => "No unique URL found",
        }
    }
}
