use std::time::Duration;
use chrono::Utc;
use log::{debug, info, warn};
use tokio::sync::watch;
use tokio::time::Instant;
use crate::common::common::shutdown_waiting;
use crate::stats::enums::stats_event::StatsEvent;
use crate::tracker::structs::sweep_outcome::SweepOutcome;
use crate::tracker::structs::torrent_tracker::TorrentTracker;

/// Next absolute deadline after `previous`, plus the number of whole periods that
/// were already missed at `now`. Deadlines advance from the intended start time,
/// never from `now`, so handler time does not accumulate as drift.
pub fn next_sweep_deadline(previous: Instant, period: Duration, now: Instant) -> (Instant, u32)
{
    let period = period.max(Duration::from_millis(1));
    let mut next = previous + period;
    let mut skipped = 0u32;
    while next <= now {
        next += period;
        skipped = skipped.saturating_add(1);
    }
    (next, skipped)
}

impl TorrentTracker {
    /// Runs one sweep: consumes check-ins of alive nodes and evicts the rest.
    pub fn sweep_nodes(&self) -> SweepOutcome
    {
        let outcome = {
            let mut state = self.state.write();
            let outcome = state.sweep();
            self.refresh_gauges(&state);
            outcome
        };

        self.update_stats(StatsEvent::Sweeps, 1);
        self.set_stats(StatsEvent::TimestampSweep, Utc::now().timestamp());

        if outcome.is_empty() {
            return outcome;
        }

        let alive: Vec<u64> = outcome.alive.iter().map(|node_id| node_id.0).collect();
        let evicted: Vec<u64> = outcome.evicted_ids().iter().map(|node_id| node_id.0).collect();
        info!("[SWEEP] Node(s) {alive:?} is in the torrent and node(s) {evicted:?} have left.");

        if !outcome.evicted.is_empty() {
            self.update_stats(StatsEvent::NodesEvicted, outcome.evicted.len() as i64);
            for key in &outcome.evicted {
                debug!("[SWEEP] Evicted node {key}");
            }
            self.persist_snapshot();
        }
        outcome
    }

    /// Sweeps every `period` until `shutdown` flips to `true`.
    pub async fn sweep_threads(&self, period: Duration, mut shutdown: watch::Receiver<bool>)
    {
        info!("[BOOT] Starting thread for liveness sweeps with {} ms interval...", period.as_millis());

        let mut deadline = Instant::now() + period;
        loop {
            if shutdown_waiting(deadline, &mut shutdown).await {
                info!("[BOOT] Shutting down thread for liveness sweeps...");
                return;
            }

            self.sweep_nodes();

            let (next, skipped) = next_sweep_deadline(deadline, period, Instant::now());
            if skipped > 0 {
                warn!("[SWEEP] Sweep overran its period, skipping {skipped} tick(s)");
            }
            deadline = next;
        }
    }
}
