use std::sync::Arc;
use parking_lot::{Mutex, RwLock};
use crate::config::structs::configuration::Configuration;
use crate::snapshot::structs::snapshot_writer::SnapshotWriter;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::tracker::structs::tracker_state::TrackerState;

#[derive(Debug)]
pub struct TorrentTracker {
    pub config: Arc<Configuration>,
    pub state: Arc<RwLock<TrackerState>>,
    pub snapshot_writer: SnapshotWriter,
    /// Serialises capture-and-write so an older snapshot never lands after a newer one.
    pub snapshot_lock: Mutex<()>,
    pub stats: Arc<StatsAtomics>,
}
