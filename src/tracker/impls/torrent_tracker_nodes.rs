use log::{debug, info};
use crate::tracker::structs::node_key::NodeKey;
use crate::tracker::structs::torrent_tracker::TorrentTracker;

impl TorrentTracker {
    /// Starts (or renews) liveness tracking for `key`. Returns `true` for a new key.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn register(&self, key: NodeKey) -> bool
    {
        let mut state = self.state.write();
        let added = state.liveness.register(key);
        self.refresh_gauges(&state);
        added
    }

    /// Flags a registered node as alive for the next sweep. Unknown keys return `false`.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn check_in(&self, key: &NodeKey) -> bool
    {
        self.state.write().liveness.check_in(key)
    }

    /// Removes `key` from ownership, frequencies and liveness under one lock.
    /// Unknown nodes are a no-op and return `false`.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn exit_node(&self, key: &NodeKey) -> bool
    {
        let known = {
            let mut state = self.state.write();
            let known = state.evict(key);
            self.refresh_gauges(&state);
            known
        };

        if known {
            info!("[EXIT] Node {} exited the torrent intentionally.", key.node_id);
            self.persist_snapshot();
        } else {
            debug!("[EXIT] Node {key} is not known, nothing to remove");
        }
        known
    }

    pub fn is_registered(&self, key: &NodeKey) -> bool
    {
        self.state.read().liveness.is_registered(key)
    }

    pub fn liveness_flag(&self, key: &NodeKey) -> Option<bool>
    {
        self.state.read().liveness.flag(key)
    }

    pub fn get_nodes(&self) -> Vec<NodeKey>
    {
        self.state.read().liveness.flags.keys().cloned().collect()
    }
}
