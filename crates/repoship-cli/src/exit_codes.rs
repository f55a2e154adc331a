//! Exit codes for the repoship binary

#![allow(dead_code)]

/// Success - the release was published
pub const SUCCESS: i32 = 0;

/// General error - an update step failed
pub const ERROR: i32 = 1;

/// Usage error - malformed command-line arguments
pub const USAGE_ERROR: i32 = 1;
