//! Common utilities and shared functionality.
//!
//! Helpers used by every other module: logging setup, log level parsing,
//! timestamps and the shutdown-aware sleep used by the background loops.
//!
//! # Example
//!
//! ```rust,ignore
//! use p2p_tracker::common::common::{current_time, parse_log_level};
//!
//! let level = parse_log_level("info");
//! let now = current_time();
//! ```

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;
