//! Snapshot data structures.

/// Serializable copy of the registry tables.
pub mod registry_snapshot;

/// Writes snapshots into a directory.
pub mod snapshot_writer;
