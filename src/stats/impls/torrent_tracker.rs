use std::sync::atomic::{AtomicI64, Ordering};
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats::Stats;
use crate::tracker::structs::torrent_tracker::TorrentTracker;

impl TorrentTracker {
    pub fn get_stats(&self) -> Stats
    {
        Stats {
            started: self.stats.started.load(Ordering::SeqCst),
            timestamp_run_sweep: self.stats.timestamp_run_sweep.load(Ordering::SeqCst),
            files: self.stats.files.load(Ordering::SeqCst),
            nodes: self.stats.nodes.load(Ordering::SeqCst),
            own_handled: self.stats.own_handled.load(Ordering::SeqCst),
            need_handled: self.stats.need_handled.load(Ordering::SeqCst),
            update_handled: self.stats.update_handled.load(Ordering::SeqCst),
            register_handled: self.stats.register_handled.load(Ordering::SeqCst),
            exit_handled: self.stats.exit_handled.load(Ordering::SeqCst),
            invalid_requests: self.stats.invalid_requests.load(Ordering::SeqCst),
            invalid_modes: self.stats.invalid_modes.load(Ordering::SeqCst),
            sweeps: self.stats.sweeps.load(Ordering::SeqCst),
            nodes_evicted: self.stats.nodes_evicted.load(Ordering::SeqCst),
            snapshots_written: self.stats.snapshots_written.load(Ordering::SeqCst),
            snapshot_failures: self.stats.snapshot_failures.load(Ordering::SeqCst),
        }
    }

    pub fn update_stats(&self, event: StatsEvent, value: i64) -> Stats
    {
        self.stats_counter(event).fetch_add(value, Ordering::SeqCst);
        self.get_stats()
    }

    pub fn set_stats(&self, event: StatsEvent, value: i64) -> Stats
    {
        self.stats_counter(event).store(value, Ordering::SeqCst);
        self.get_stats()
    }

    fn stats_counter(&self, event: StatsEvent) -> &AtomicI64
    {
        match event {
            StatsEvent::Files => &self.stats.files,
            StatsEvent::Nodes => &self.stats.nodes,
            StatsEvent::OwnHandled => &self.stats.own_handled,
            StatsEvent::NeedHandled => &self.stats.need_handled,
            StatsEvent::UpdateHandled => &self.stats.update_handled,
            StatsEvent::RegisterHandled => &self.stats.register_handled,
            StatsEvent::ExitHandled => &self.stats.exit_handled,
            StatsEvent::InvalidRequests => &self.stats.invalid_requests,
            StatsEvent::InvalidModes => &self.stats.invalid_modes,
            StatsEvent::Sweeps => &self.stats.sweeps,
            StatsEvent::NodesEvicted => &self.stats.nodes_evicted,
            StatsEvent::TimestampSweep => &self.stats.timestamp_run_sweep,
            StatsEvent::SnapshotsWritten => &self.stats.snapshots_written,
            StatsEvent::SnapshotFailures => &self.stats.snapshot_failures,
        }
    }
}
