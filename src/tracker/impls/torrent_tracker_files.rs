use log::{debug, info};
use crate::stats::enums::stats_event::StatsEvent;
use crate::tracker::structs::node_id::NodeId;
use crate::tracker::structs::torrent_tracker::TorrentTracker;
use crate::tracker::types::OwnershipEntry;

impl TorrentTracker {
    /// Records `entry` as an owner of `filename`. Duplicate announcements are accepted
    /// and change nothing. Returns whether a new entry was stored.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn add_ownership(&self, filename: &str, entry: OwnershipEntry) -> bool
    {
        let node_id = entry.node_id;
        let added = {
            let mut state = self.state.write();
            let added = state.announce_ownership(filename, entry);
            self.refresh_gauges(&state);
            added
        };

        info!("[OWN] Node {node_id} owns {filename} and is ready to send.");
        if added {
            self.persist_snapshot();
        } else {
            debug!("[OWN] Node {node_id} was already listed for {filename}");
        }
        added
    }

    /// Current owners of `filename` with their request frequency. Order is unspecified.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn search_owners(&self, filename: &str) -> Vec<(OwnershipEntry, u64)>
    {
        self.state.read().registry.search_owners(filename)
    }

    #[tracing::instrument(level = "debug", skip(self))]
    pub fn record_request(&self, node_id: NodeId) -> u64
    {
        let count = self.state.write().registry.record_request(node_id);
        debug!("[UPDATE] Node {node_id} has now served {count} request(s)");
        if self.config.tracker_config.snapshot_on_update {
            self.persist_snapshot();
        }
        count
    }

    pub fn get_frequency(&self, node_id: NodeId) -> u64
    {
        self.state.read().registry.frequency(node_id)
    }

    pub fn get_files(&self) -> Vec<String>
    {
        self.state.read().registry.files.keys().cloned().collect()
    }
}
