//! HTTP transport for the tracker.
//!
//! # Endpoints
//!
//! - `POST /tracker` - JSON request dispatched by its `mode`
//! - `GET /` - liveness probe
//! - `GET /stats` - tracker counters as JSON
//!
//! Any other route answers `404` with `{"error": "unknown request"}`.
//! Rejected requests answer `400` with `{"error": "<reason>"}`.

/// Core HTTP service implementation.
#[allow(clippy::module_inception)]
pub mod http;
