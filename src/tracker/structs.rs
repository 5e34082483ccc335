//! Data structures for the coordination tracker.

/// Main tracker instance struct.
///
/// Holds the configuration, the locked coordination state, the snapshot
/// writer and the statistics counters.
pub mod torrent_tracker;

/// Integer node identifier.
pub mod node_id;

/// `(host, port)` endpoint a node serves on.
pub mod node_address;

/// `(node_id, address)` pair used for liveness and ownership.
pub mod node_key;

/// File ownership and request frequency tables.
pub mod registry_store;

/// Check-in flags consumed by each sweep.
pub mod liveness_tracker;

/// Registry and liveness tables guarded together.
pub mod tracker_state;

/// Alive and evicted nodes reported by a sweep.
pub mod sweep_outcome;

/// Loosely typed request body before mode validation.
pub mod request_payload;

/// Response body of a `NEED` request.
pub mod search_response;
