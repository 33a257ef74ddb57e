//! Tests for config functionality.

use crate::config::Config;
use crate::config::types::default_ignored_files;
use crate::error::AuditError;
use std::path::Path;
use tempfile::TempDir;

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.backend_dir, "cspuz_solver_backend/src/puzzle");
    assert_eq!(config.definitions_dir, "cspuz_rs_puzzles/src/puzzles");
    assert_eq!(config.registry_path, "cspuz_solver_backend/src/puzzle/mod.rs");
    assert_eq!(config.extension, "rs");
    assert_eq!(config.ignored_files, default_ignored_files());
    assert_eq!(config.registry_start_marker, "puzzle_list!(");
    assert_eq!(config.registry_end_marker, ");");
}

#[test]
fn test_parse_empty_yaml() {
    let config = Config::from_yaml("").unwrap();
    assert_eq!(config.extension, "rs");
    assert_eq!(config.backend_dir, "cspuz_solver_backend/src/puzzle");
}

#[test]
fn test_parse_partial_yaml() {
    let yaml = r#"
backend_dir: backend/puzzles
ignored_files:
  - mod.rs
  - "*_internal.rs"
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert_eq!(config.backend_dir, "backend/puzzles");
    assert_eq!(config.ignored_files, vec!["mod.rs", "*_internal.rs"]);

    // Unspecified values should use defaults
    assert_eq!(config.definitions_dir, "cspuz_rs_puzzles/src/puzzles");
    assert_eq!(config.registry_start_marker, "puzzle_list!(");
}

#[test]
fn test_unknown_fields_ignored() {
    let yaml = r#"
extension: rs
future_option: true
"#;
    let config = Config::from_yaml(yaml).unwrap();
    assert_eq!(config.extension, "rs");
}

#[test]
fn test_invalid_yaml_is_user_error() {
    let result = Config::from_yaml("backend_dir: [unclosed");
    assert!(matches!(result, Err(AuditError::UserError(_))));
}

#[test]
fn test_leading_dot_extension_rejected() {
    let err = Config::from_yaml("extension: .rs").unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("leading dot"));
    assert!(msg.contains("'rs'"));
}

#[test]
fn test_empty_extension_rejected() {
    let config = Config {
        extension: String::new(),
        ..Default::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn test_identical_markers_rejected() {
    let config = Config {
        registry_start_marker: "list!(".to_string(),
        registry_end_marker: "list!(".to_string(),
        ..Default::default()
    };
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("must differ"));
}

#[test]
fn test_invalid_ignore_glob_rejected() {
    let config = Config {
        ignored_files: vec!["[unclosed".to_string()],
        ..Default::default()
    };
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("ignored_files"));
}

#[test]
fn test_load_or_default_without_file() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::load_or_default(temp_dir.path().join("missing.yaml")).unwrap();
    assert_eq!(config.extension, "rs");
}

#[test]
fn test_load_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.yaml");
    std::fs::write(&path, "registry_path: src/registry.rs\n").unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.registry_path, "src/registry.rs");
    assert_eq!(
        config.registry_file(Path::new("/repo")),
        Path::new("/repo/src/registry.rs")
    );
}
