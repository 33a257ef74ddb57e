//! Canonical URL extraction from puzzle definition modules.
//!
//! A definition module is expected to declare its example problem as
//! `let url = "...";` exactly once. The extractor counts every non-overlapping
//! declaration and only yields a URL when the count is one; zero and many are
//! both "no unique url" but stay distinguishable through the match count.
//!
//! Matching goes through [`DeclarationFinder`] so the regex strategy can be
//! swapped without touching callers.

mod declaration;
mod extractor;
mod types;


pub use declaration::{Declaration, DeclarationFinder, RegexDeclarationFinder};
pub use extractor::UrlExtractor;
pub use types::{ExtractionResult, UrlStatus};
