//! Exit code constants for the diffparse CLI.
//!
//! - 0: Success
//! - 1: User error (unreadable input, bad config)
//! - 2: Parse failure (malformed file or hunk header)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: input or config file could not be read or deserialized.
pub const USER_ERROR: i32 = 1;

/// Parse failure: the input is not a recognizable diff at some line.
pub const PARSE_FAILURE: i32 = 2;
