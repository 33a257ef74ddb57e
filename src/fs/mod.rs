//! Filesystem utilities for puzzle-audit.
//!
//! Directory scanning for puzzle modules and whole-file replacement used
//! when a scaffold is appended to a backend module.

pub mod atomic;
pub mod scan;

pub use atomic::atomic_write_file;
pub use scan::{FileScanner, ScannedFile};
