//! Coordination state of the file-sharing network.
//!
//! The tracker keeps three tables: which nodes own which files, how many
//! requests each node reported serving, and whether each node checked in
//! since the last sweep. Ownership and liveness live together in one
//! [`TrackerState`](structs::tracker_state::TrackerState) behind a single
//! `RwLock`, so an eviction never leaves a node in one table and not the other.
//!
//! # Main Components
//!
//! - `TorrentTracker` - shared tracker instance, one per process
//! - `RegistryStore` - ownership and request frequency tables
//! - `LivenessTracker` - check-in flags consumed by sweeps
//! - `TrackerRequest` / `TrackerResponse` - the five request modes and their answers
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use p2p_tracker::config::structs::configuration::Configuration;
//! use p2p_tracker::tracker::structs::torrent_tracker::TorrentTracker;
//!
//! let tracker = Arc::new(TorrentTracker::new(Arc::new(Configuration::init())));
//! let response = tracker.handle_message(br#"{"mode":"NEED","node_id":1,"filename":"a.txt"}"#)?;
//! ```

/// Request modes, parsed requests, responses and errors.
pub mod enums;

/// Implementation blocks for tracker structs.
pub mod impls;

/// Data structures for tracker operations.
pub mod structs;

/// Type aliases for the registry tables.
pub mod types;
