//! Exit code constants for the puzzle-audit CLI.
//!
//! - 0: Success
//! - 1: User error (bad config, unreadable inputs)
//! - 2: Registry validation failure (ordering or unparseable entries)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: invalid configuration, missing directory, or unreadable file.
pub const USER_ERROR: i32 = 1;

/// Registry validation failure: entries out of order, malformed, or unterminated.
pub const VALIDATION_FAILURE: i32 = 2;
