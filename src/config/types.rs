//! Configuration constants and default value functions.

/// Name of the optional config file at the project root.
pub const CONFIG_FILE_NAME: &str = ".puzzle-audit.yaml";

pub(crate) fn default_backend_dir() -> String {
    "cspuz_solver_backend/src/puzzle".to_string()
}

pub(crate) fn default_definitions_dir() -> String {
    "cspuz_rs_puzzles/src/puzzles".to_string()
}

pub(crate) fn default_registry_path() -> String {
    "cspuz_solver_backend/src/puzzle/mod.rs".to_string()
}

pub(crate) fn default_extension() -> String {
    "rs".to_string()
}

/// Default filenames skipped by the backend scan.
///
/// `mod.rs` holds the registry itself and `heyawake_internal.rs` is a helper
/// shared by several heyawake variants with no definition counterpart.
pub fn default_ignored_files() -> Vec<String> {
    vec!["mod.rs".to_string(), "heyawake_internal.rs".to_string()]
}

pub(crate) fn default_registry_start_marker() -> String {
    "puzzle_list!(".to_string()
}

pub(crate) fn default_registry_end_marker() -> String {
    ");".to_string()
}
