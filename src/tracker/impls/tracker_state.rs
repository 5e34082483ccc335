use crate::tracker::structs::node_key::NodeKey;
use crate::tracker::structs::sweep_outcome::SweepOutcome;
use crate::tracker::structs::tracker_state::TrackerState;
use crate::tracker::types::OwnershipEntry;

impl TrackerState {
    /// An ownership announcement also starts liveness tracking for the owner,
    /// so every owner listed in the registry can be swept.
    pub fn announce_ownership(&mut self, filename: &str, entry: OwnershipEntry) -> bool
    {
        self.liveness.ensure_registered(&entry);
        self.registry.add_ownership(filename, entry)
    }

    /// Removes `key` from ownership, frequencies and liveness in one step.
    /// Returns whether the key was known anywhere.
    pub fn evict(&mut self, key: &NodeKey) -> bool
    {
        let files_removed = self.registry.remove_node(key);
        let was_registered = self.liveness.unregister(key);
        files_removed > 0 || was_registered
    }

    /// One pass over the liveness table: flags that are set are consumed,
    /// keys whose flag is still clear are evicted.
    pub fn sweep(&mut self) -> SweepOutcome
    {
        let keys: Vec<(NodeKey, bool)> = self.liveness.flags.iter()
            .map(|(key, checked_in)| (key.clone(), *checked_in))
            .collect();

        let mut outcome = SweepOutcome::default();
        for (key, checked_in) in keys {
            if checked_in {
                if let Some(flag) = self.liveness.flags.get_mut(&key) {
                    *flag = false;
                }
                outcome.alive.insert(key.node_id);
            } else {
                self.evict(&key);
                outcome.evicted.push(key);
            }
        }
        outcome
    }
}
