//! Exit code constants for the polymer-config CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unreadable or malformed config file)
//! - 2: Validation failure (paths outside root, malformed builds)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, unreadable file, invalid JSON or glob.
pub const USER_ERROR: i32 = 1;

/// Validation failure: the configuration violates a structural invariant.
pub const VALIDATION_FAILURE: i32 = 2;
