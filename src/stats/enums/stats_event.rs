//! Statistics event types for tracking various metrics.

use serde::{Deserialize, Serialize};

/// Enumeration of all trackable statistics events.
///
/// Each variant maps onto one counter in
/// [`StatsAtomics`](crate::stats::structs::stats_atomics::StatsAtomics).
///
/// # Example
///
/// ```rust,ignore
/// use p2p_tracker::stats::enums::stats_event::StatsEvent;
///
/// tracker.update_stats(StatsEvent::OwnHandled, 1);
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum StatsEvent {
    Files,
    Nodes,
    OwnHandled,
    NeedHandled,
    UpdateHandled,
    RegisterHandled,
    ExitHandled,
    InvalidRequests,
    InvalidModes,
    Sweeps,
    NodesEvicted,
    TimestampSweep,
    SnapshotsWritten,
    SnapshotFailures,
}
