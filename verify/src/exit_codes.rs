//! Stable exit codes for verify CLI commands.

/// Command succeeded, or every check in the suite passed.
pub const OK: i32 = 0;
/// Invalid arguments, config, or suite file, or an I/O failure.
pub const INVALID: i32 = 1;
/// The suite ran and at least one check failed.
pub const FAILED: i32 = 2;
