//! # P2P Tracker
//!
//! Coordination tracker for a peer-to-peer file-sharing network, built on
//! Actix-web.
//!
//! ## Overview
//!
//! Nodes talk to the tracker over HTTP with small JSON requests. The tracker
//! records which nodes own which files, answers owner searches, keeps a
//! per-node count of served requests, and evicts nodes that stop checking in.
//! The registry is rewritten to `nodes.json` and `files.json` after changes.
//!
//! ## Request Modes
//!
//! - `OWN` - a node announces it holds a file
//! - `NEED` - a node asks who owns a file
//! - `UPDATE` - a node reports it served one more request
//! - `REGISTER` - a node starts, or renews, liveness tracking
//! - `EXIT` - a node leaves the network
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use p2p_tracker::config::structs::configuration::Configuration;
//! use p2p_tracker::tracker::structs::torrent_tracker::TorrentTracker;
//!
//! let config = Arc::new(Configuration::load_from_file("config.toml", false)?);
//! let tracker = Arc::new(TorrentTracker::new(config));
//! ```
//!
//! ## Modules
//!
//! - [`common`] - Logging setup and shared helpers
//! - [`config`] - Configuration management and TOML parsing
//! - [`http`] - HTTP transport
//! - [`snapshot`] - Registry snapshot files
//! - [`stats`] - Real-time statistics counters
//! - [`structs`] - CLI argument parsing
//! - [`tracker`] - Registry, liveness and request dispatch

/// Common utilities and shared functionality.
///
/// Contains logging setup, log level parsing and the shutdown-aware sleep
/// used by the background loops.
pub mod common;

/// Configuration management module.
///
/// Handles loading, parsing, and validating configuration from TOML files.
pub mod config;

/// HTTP transport for tracker requests and statistics.
pub mod http;

/// Snapshot persistence of the registry to JSON files.
pub mod snapshot;

/// Statistics tracking and monitoring module.
///
/// Collects real-time counters on handled requests, sweeps and snapshot writes.
pub mod stats;

/// CLI argument parsing.
pub mod structs;

/// Core tracker logic module.
///
/// Contains the ownership registry, liveness tracking, the periodic sweep
/// and the request dispatcher.
pub mod tracker;
