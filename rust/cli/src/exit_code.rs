//! Exit code constants for the CLI application.

/// Success exit code (standard Unix convention).
pub const SUCCESS: i32 = 0;

/// Argument, configuration or simulation error.
pub const ERROR: i32 = 2;
