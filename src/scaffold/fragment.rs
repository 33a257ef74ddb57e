//! Structured scaffold fragment and its serialization.

use crate::error::{AuditError, Result};
use regex::Regex;
use std::fmt::Write;

/// Reserved name of the injected regression test.
pub const TEST_FN_NAME: &str = "test_solve";

/// Placeholder expected board emitted into a fresh scaffold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardFixture {
    pub kind: &'static str,
    pub height: usize,
    pub width: usize,
    pub uniqueness: &'static str,
}

impl Default for BoardFixture {
    fn default() -> Self {
        Self {
            kind: "BoardKind::Grid",
            height: 6,
            width: 6,
            uniqueness: "Uniqueness::Unique",
        }
    }
}

/// The test block appended to uncovered backend modules.
#[derive(Debug, Clone)]
pub struct Scaffold {
    module: &'static str,
    imports: Vec<&'static str>,
    test_name: &'static str,
    solver: &'static str,
    assertion: &'static str,
    fixture: BoardFixture,
    marker: Regex,
}

impl Scaffold {
    /// The standard backend scaffold (`tests::test_solve` via `compare_board!`).
    pub fn standard() -> Result<Self> {
        Self::new(TEST_FN_NAME)
    }

    fn new(test_name: &'static str) -> Result<Self> {
        let pattern = format!(
            r"(?:\bpub(?:\s*\([^)]*\))?\s+)?\bfn\s+{}\s*\(",
            regex::escape(test_name)
        );
        let marker = Regex::new(&pattern).map_err(|e| {
            AuditError::UserError(format!(
                "invalid scaffold marker for '{}': {}",
                test_name, e
            ))
        })?;

        Ok(Self {
            module: "tests",
            imports: vec![
                "super::solve",
                "crate::board::*",
                "crate::compare_board",
                "crate::uniqueness::Uniqueness",
            ],
            test_name,
            solver: "solve",
            assertion: "compare_board!",
            fixture: BoardFixture::default(),
            marker,
        })
    }

    /// Whether `text` already declares the scaffold's test function,
    /// with or without a visibility qualifier.
    pub fn is_present(&self, text: &str) -> bool {
        self.marker.is_match(text)
    }

    /// Serialize the scaffold for `url`.
    ///
    /// The URL is inserted verbatim: it was captured from the inside of a
    /// string literal, so it is already in literal-escaped form. The output
    /// starts with a blank line and ends with a newline.
    pub fn render(&self, url: &str) -> String {
        let mut out = String::new();
        // Writing to a String cannot fail.
        let _ = self.write_to(&mut out, url);
        out
    }

    fn write_to(&self, out: &mut String, url: &str) -> std::fmt::Result {
        let fixture = &self.fixture;

        writeln!(out)?;
        writeln!(out, "#[cfg(test)]")?;
        writeln!(out, "mod {} {{", self.module)?;
        for import in &self.imports {
            writeln!(out, "    use {};", import)?;
        }
        writeln!(out)?;
        writeln!(out, "    #[test]")?;
        writeln!(out, "    #[rustfmt::skip]")?;
        writeln!(out, "    fn {}() {{", self.test_name)?;
        writeln!(out, "        {}(", self.assertion)?;
        writeln!(out, "            {}(\"{}\"),", self.solver, url)?;
        writeln!(out, "            Board {{")?;
        writeln!(out, "                kind: {},", fixture.kind)?;
        writeln!(out, "                height: {},", fixture.height)?;
        writeln!(out, "                width: {},", fixture.width)?;
        writeln!(out, "                data: vec![")?;
        writeln!(out, "                ],")?;
        writeln!(out, "                uniqueness: {},", fixture.uniqueness)?;
        writeln!(out, "            }},")?;
        writeln!(out, "        );")?;
        writeln!(out, "    }}")?;
        writeln!(out, "}}")
    }
}
