//! Standard exit codes for CLI operations
//!
//! These exit codes follow Unix conventions and sysexits.h where applicable.

#![allow(dead_code)]

/// Success - operation completed without errors
pub const SUCCESS: i32 = 0;

/// Configuration error - config file missing, unreadable, or incomplete
pub const CONFIG_ERROR: i32 = 1;

/// Check error - a check cycle failed (fetch, cache, or notification)
pub const CHECK_ERROR: i32 = 2;

/// Usage error - invalid arguments or options (following sysexits.h convention)
pub const USAGE_ERROR: i32 = 64;
