//! Implementation blocks for configuration types.

/// Default values, TOML loading/saving and validation.
pub mod configuration;

/// Display and Error implementations for ConfigurationError.
pub mod configuration_error;
