//! Snapshot implementation blocks.

/// Capturing a snapshot from the registry store.
pub mod registry_snapshot;

/// Encoding and writing snapshot files.
pub mod snapshot_writer;
