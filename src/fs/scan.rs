//! Puzzle module enumeration.
//!
//! Lists the files of one extension in a single directory (non-recursive),
//! sorted by filename, skipping names matched by an exclusion set.

use crate::error::{AuditError, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// A file found by [`FileScanner::scan`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedFile {
    /// Bare filename, e.g. `akari.rs`.
    pub name: String,
    /// Full path to the file.
    pub path: PathBuf,
}

/// Enumerates puzzle modules by extension with an explicit exclusion set.
#[derive(Debug, Clone)]
pub struct FileScanner {
    extension: String,
    excluded: GlobSet,
}

impl FileScanner {
    /// Build a scanner for `extension` (no leading dot, matched
    /// case-sensitively) that skips any
    /// filename matching one of `excluded` (glob patterns; a plain name
    /// matches only itself).
    pub fn new(extension: &str, excluded: &[String]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in excluded {
            let glob = Glob::new(pattern).map_err(|e| {
                AuditError::UserError(format!(
                    "invalid exclusion pattern '{}': {}",
                    pattern, e
                ))
            })?;
            builder.add(glob);
        }
        let excluded = builder.build().map_err(|e| {
            AuditError::UserError(format!("failed to build exclusion set: {}", e))
        })?;

        Ok(Self {
            extension: extension.to_string(),
            excluded,
        })
    }

    /// Whether `name` is skipped by the exclusion set.
    pub fn is_excluded(&self, name: &str) -> bool {
        self.excluded.is_match(name)
    }

    /// List matching files in `dir`, sorted lexicographically by filename.
    ///
    /// # Errors
    ///
    /// * `AuditError::DirectoryNotFound` - `dir` does not exist or is not a directory
    /// * `AuditError::Io` - the directory could not be read
    pub fn scan(&self, dir: &Path, label: &str) -> Result<Vec<ScannedFile>> {
        if !dir.is_dir() {
            return Err(AuditError::DirectoryNotFound {
                label: label.to_string(),
                path: dir.to_path_buf(),
            });
        }

        let entries = std::fs::read_dir(dir).map_err(|e| AuditError::io(dir, e))?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| AuditError::io(dir, e))?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                warn!(file = %path.display(), "skipping file with non-UTF-8 name");
                continue;
            };
            if !self.has_extension(&path) {
                continue;
            }
            if self.is_excluded(name) {
                debug!(file = name, "skipping excluded file");
                continue;
            }

            files.push(ScannedFile {
                name: name.to_string(),
                path: path.clone(),
            });
        }

        files.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(files)
    }

    fn has_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e == self.extension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), "// puzzle\n").unwrap();
    }

    fn names(files: &[ScannedFile]) -> Vec<&str> {
        files.iter().map(|f| f.name.as_str()).collect()
    }

    #[test]
    fn test_scan_sorts_by_filename() {
        let temp_dir = TempDir::new().unwrap();
        touch(temp_dir.path(), "nurikabe.rs");
        touch(temp_dir.path(), "akari.rs");
        touch(temp_dir.path(), "heyawake.rs");

        let scanner = FileScanner::new("rs", &[]).unwrap();
        let files = scanner.scan(temp_dir.path(), "Backend").unwrap();

        assert_eq!(names(&files), vec!["akari.rs", "heyawake.rs", "nurikabe.rs"]);
        assert_eq!(files[0].path, temp_dir.path().join("akari.rs"));
    }

    #[test]
    fn test_scan_filters_extension() {
        let temp_dir = TempDir::new().unwrap();
        touch(temp_dir.path(), "akari.rs");
        touch(temp_dir.path(), "notes.md");
        touch(temp_dir.path(), "Makefile");
        fs::create_dir(temp_dir.path().join("nested.rs")).unwrap();

        let scanner = FileScanner::new("rs", &[]).unwrap();
        let files = scanner.scan(temp_dir.path(), "Backend").unwrap();

        assert_eq!(names(&files), vec!["akari.rs"]);
    }

    #[test]
    fn test_scan_extension_is_case_sensitive() {
        let temp_dir = TempDir::new().unwrap();
        touch(temp_dir.path(), "akari.rs");
        touch(temp_dir.path(), "HEYAWAKE.RS");
        touch(temp_dir.path(), "nurikabe.Rs");

        let scanner = FileScanner::new("rs", &[]).unwrap();
        let files = scanner.scan(temp_dir.path(), "Backend").unwrap();

        assert_eq!(names(&files), vec!["akari.rs"]);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_scan_skips_non_utf8_names() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let temp_dir = TempDir::new().unwrap();
        touch(temp_dir.path(), "akari.rs");
        let bad_name = OsStr::from_bytes(b"bad\xff.rs");
        fs::write(temp_dir.path().join(bad_name), "").unwrap();

        let scanner = FileScanner::new("rs", &[]).unwrap();
        let files = scanner.scan(temp_dir.path(), "Backend").unwrap();

        assert_eq!(names(&files), vec!["akari.rs"]);
    }

    #[test]
    fn test_scan_applies_exclusions() {
        let temp_dir = TempDir::new().unwrap();
        touch(temp_dir.path(), "mod.rs");
        touch(temp_dir.path(), "heyawake.rs");
        touch(temp_dir.path(), "heyawake_internal.rs");

        let excluded = vec!["mod.rs".to_string(), "heyawake_internal.rs".to_string()];
        let scanner = FileScanner::new("rs", &excluded).unwrap();
        let files = scanner.scan(temp_dir.path(), "Backend").unwrap();

        assert_eq!(names(&files), vec!["heyawake.rs"]);
    }

    #[test]
    fn test_scan_exclusion_globs() {
        let temp_dir = TempDir::new().unwrap();
        touch(temp_dir.path(), "akari.rs");
        touch(temp_dir.path(), "akari_internal.rs");
        touch(temp_dir.path(), "heyawake_internal.rs");

        let scanner = FileScanner::new("rs", &["*_internal.rs".to_string()]).unwrap();
        let files = scanner.scan(temp_dir.path(), "Backend").unwrap();

        assert_eq!(names(&files), vec!["akari.rs"]);
    }

    #[test]
    fn test_scan_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing");

        let scanner = FileScanner::new("rs", &[]).unwrap();
        let err = scanner.scan(&missing, "Definitions").unwrap_err();

        match err {
            AuditError::DirectoryNotFound { label, path } => {
                assert_eq!(label, "Definitions");
                assert_eq!(path, missing);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_invalid_exclusion_pattern() {
        let result = FileScanner::new("rs", &["[bad".to_string()]);
        assert!(matches!(result, Err(AuditError::UserError(_))));
    }
}
