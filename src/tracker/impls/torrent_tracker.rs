use std::sync::Arc;
use std::sync::atomic::AtomicI64;
use parking_lot::{Mutex, RwLock};
use crate::common::common::current_time;
use crate::config::structs::configuration::Configuration;
use crate::snapshot::structs::snapshot_writer::SnapshotWriter;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::tracker::structs::torrent_tracker::TorrentTracker;
use crate::tracker::structs::tracker_state::TrackerState;

impl TorrentTracker {
    #[tracing::instrument(level = "debug")]
    pub fn new(config: Arc<Configuration>) -> TorrentTracker
    {
        let snapshot_writer = SnapshotWriter::new(
            config.directory.tracker_db_dir.as_str(),
            config.tracker_config.atomic_snapshots
        );

        TorrentTracker {
            config,
            state: Arc::new(RwLock::new(TrackerState::default())),
            snapshot_writer,
            snapshot_lock: Mutex::new(()),
            stats: Arc::new(StatsAtomics {
                started: AtomicI64::new(current_time() as i64),
                ..Default::default()
            }),
        }
    }

    /// Copies the table sizes into the gauges; called with the state lock held.
    pub(crate) fn refresh_gauges(&self, state: &TrackerState)
    {
        self.set_stats(StatsEvent::Files, state.registry.files.len() as i64);
        self.set_stats(StatsEvent::Nodes, state.liveness.flags.len() as i64);
    }
}
