//! Enumerations for tracker operations.

/// The five request modes: `OWN`, `NEED`, `UPDATE`, `REGISTER`, `EXIT`.
pub mod tracker_mode;

/// Validated request, one variant per mode.
pub mod tracker_request;

/// Success payloads: a status acknowledgement or a search result.
pub mod tracker_response;

/// Errors raised while parsing requests or persisting snapshots.
pub mod tracker_error;
