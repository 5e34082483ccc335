use log::error;
use crate::snapshot::structs::registry_snapshot::RegistrySnapshot;
use crate::stats::enums::stats_event::StatsEvent;
use crate::tracker::enums::tracker_error::TrackerError;
use crate::tracker::structs::torrent_tracker::TorrentTracker;

impl TorrentTracker {
    /// Captures the registry under a read lock and writes it with the lock released.
    pub fn save_snapshot(&self) -> Result<(), TrackerError>
    {
        let _writing = self.snapshot_lock.lock();
        let snapshot = RegistrySnapshot::from(&self.state.read().registry);
        self.snapshot_writer.write(&snapshot)?;
        self.update_stats(StatsEvent::SnapshotsWritten, 1);
        Ok(())
    }

    /// Like [`save_snapshot`](Self::save_snapshot), but a failure is only logged and counted.
    pub fn persist_snapshot(&self) -> bool
    {
        match self.save_snapshot() {
            Ok(_) => true,
            Err(error) => {
                self.update_stats(StatsEvent::SnapshotFailures, 1);
                error!("[SNAPSHOT] Unable to write snapshot to {}: {error}", self.snapshot_writer.directory.display());
                false
            }
        }
    }
}
