//! Configuration management module.
//!
//! This module handles loading, parsing, and validating the tracker configuration
//! from TOML files.
//!
//! # Configuration Structure
//!
//! The configuration file (`config.toml`) contains sections for:
//! - **tracker_config**: Sweep cadence and snapshot behaviour
//! - **directory**: Where snapshots and the tracker log are written
//! - **http_server**: HTTP server instances serving the `/tracker` endpoint
//!
//! # Example
//!
//! ```rust,ignore
//! use p2p_tracker::config::structs::configuration::Configuration;
//!
//! // Load configuration from file, creating a default one when asked to
//! let config = Configuration::load_from_file("config.toml", true)?;
//! ```

/// Configuration enumerations (errors).
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;

/// Unit tests for configuration defaults, parsing and validation.
pub mod tests;
