//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file.

/// Root configuration structure containing all settings.
pub mod configuration;

/// Core tracker settings (sweep interval, snapshot behaviour).
pub mod tracker_config;

/// Snapshot and log directories.
pub mod directory_config;

/// HTTP server configuration.
pub mod http_trackers_config;
