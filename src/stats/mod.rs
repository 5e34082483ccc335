//! Real-time statistics tracking and monitoring module.
//!
//! Atomic counters for tracker activity, readable without taking the
//! registry lock.
//!
//! # Statistics Categories
//!
//! - **Gauges**: files currently owned, nodes currently tracked for liveness
//! - **Requests**: handled `OWN`, `NEED`, `UPDATE`, `REGISTER`, `EXIT` requests
//!   and rejected requests
//! - **Sweeps**: completed sweeps, evicted nodes, last sweep timestamp
//! - **Snapshots**: written snapshots and failed writes
//!
//! # Example
//!
//! ```rust,ignore
//! use p2p_tracker::stats::enums::stats_event::StatsEvent;
//!
//! tracker.update_stats(StatsEvent::NeedHandled, 1);
//! let stats = tracker.get_stats();
//! ```

/// Statistics event enumeration.
pub mod enums;

/// Statistics data structures.
pub mod structs;

/// Statistics methods on the tracker.
pub mod impls;
