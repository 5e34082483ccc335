use crate::tracker::structs::node_id::NodeId;
use crate::tracker::structs::node_key::NodeKey;
use crate::tracker::structs::registry_store::RegistryStore;
use crate::tracker::types::OwnershipEntry;

impl RegistryStore {
    /// Records that `entry` owns `filename`. Returns `false` when the entry was already present.
    pub fn add_ownership(&mut self, filename: &str, entry: OwnershipEntry) -> bool
    {
        match self.files.get_mut(filename) {
            Some(owners) => owners.insert(entry),
            None => {
                self.files.insert(filename.to_string(), [entry].into_iter().collect());
                true
            }
        }
    }

    /// Every owner of `filename` with its current request frequency; empty for unknown files.
    pub fn search_owners(&self, filename: &str) -> Vec<(OwnershipEntry, u64)>
    {
        match self.files.get(filename) {
            None => Vec::new(),
            Some(owners) => owners.iter()
                .map(|owner| (owner.clone(), self.frequency(owner.node_id)))
                .collect()
        }
    }

    pub fn frequency(&self, node_id: NodeId) -> u64
    {
        self.frequencies.get(&node_id).copied().unwrap_or(0)
    }

    pub fn record_request(&mut self, node_id: NodeId) -> u64
    {
        let counter = self.frequencies.entry(node_id).or_insert(0);
        *counter = counter.saturating_add(1);
        *counter
    }

    /// Drops `key` from every file and forgets the frequency of its node id.
    /// Files left without owners are removed. Returns how many files lost the owner;
    /// an unknown key simply yields 0.
    pub fn remove_node(&mut self, key: &NodeKey) -> usize
    {
        let mut removed = 0usize;
        self.files.retain(|_, owners| {
            if owners.remove(key) {
                removed += 1;
            }
            !owners.is_empty()
        });
        self.frequencies.remove(&key.node_id);
        removed
    }

    pub fn files_owned_by(&self, key: &NodeKey) -> Vec<String>
    {
        self.files.iter()
            .filter(|(_, owners)| owners.contains(key))
            .map(|(filename, _)| filename.clone())
            .collect()
    }
}
