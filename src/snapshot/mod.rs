//! Durable snapshots of the registry.
//!
//! The registry is written as two human-readable JSON documents in the
//! configured `tracker_db_dir`:
//!
//! - `nodes.json`: node label (`node<id>`) to its request frequency
//! - `files.json`: filename to the list of its owners
//!
//! Both files are rewritten in full on every snapshot. There is no read path.

/// Snapshot data structures.
pub mod structs;

/// Snapshot capture and file writing.
pub mod impls;
