//! Exit code constants for the lgtm CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unreadable file, invalid default setting)
//! - 2: A config or deployment document failed to decode
//! - 3: The approval pattern failed to compile

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, unreadable files, or an invalid `LGTM_*` setting.
pub const USER_ERROR: i32 = 1;

/// Decode failure: malformed `.lgtm` or deployment document.
pub const DECODE_FAILURE: i32 = 2;

/// Pattern failure: the effective approval pattern is not a valid regex.
pub const PATTERN_FAILURE: i32 = 3;
