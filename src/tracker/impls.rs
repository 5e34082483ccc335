//! Implementation blocks for tracker data structures.
//!
//! Methods on `TorrentTracker` are split by concern, one file per group.

pub mod node_id;
pub mod node_address;
pub mod node_key;

/// Ownership and frequency table operations.
pub mod registry_store;

/// Check-in bookkeeping.
pub mod liveness_tracker;

/// Operations spanning both tables: ownership announcements, eviction and sweeps.
pub mod tracker_state;

pub mod sweep_outcome;
pub mod tracker_mode;

/// Request validation from raw JSON.
pub mod tracker_request;

pub mod tracker_response;

/// TorrentTracker core implementation: initialization and gauges.
pub mod torrent_tracker;

/// TorrentTracker file ownership and request frequency methods.
pub mod torrent_tracker_files;

/// TorrentTracker node registration, check-in and exit methods.
pub mod torrent_tracker_nodes;

/// TorrentTracker snapshot persistence.
pub mod torrent_tracker_snapshot;

/// TorrentTracker periodic liveness sweep.
pub mod torrent_tracker_sweep;

/// TorrentTracker request dispatch.
pub mod torrent_tracker_handlers;
