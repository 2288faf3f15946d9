//! Stable exit codes for the victims CLI.

/// Command finished, including commands whose input was rejected.
pub const OK: i32 = 0;
/// The backing file could not be read, parsed, or written.
pub const FATAL: i32 = 1;
