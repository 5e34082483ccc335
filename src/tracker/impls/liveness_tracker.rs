use crate::tracker::structs::liveness_tracker::LivenessTracker;
use crate::tracker::structs::node_key::NodeKey;

impl LivenessTracker {
    /// Registering counts as a check-in. Returns `true` for a key not seen before.
    pub fn register(&mut self, key: NodeKey) -> bool
    {
        self.flags.insert(key, true).is_none()
    }

    /// Marks a known key as alive for the next sweep. Unknown keys are left alone and `false` is returned.
    pub fn check_in(&mut self, key: &NodeKey) -> bool
    {
        match self.flags.get_mut(key) {
            Some(flag) => {
                *flag = true;
                true
            }
            None => false
        }
    }

    /// Registers `key` only when it is not tracked yet, without refreshing an existing flag.
    pub fn ensure_registered(&mut self, key: &NodeKey) -> bool
    {
        if self.flags.contains_key(key) {
            return false;
        }
        self.flags.insert(key.clone(), true);
        true
    }

    /// Absent keys are a no-op: an explicit exit and a sweep eviction may race.
    pub fn unregister(&mut self, key: &NodeKey) -> bool
    {
        self.flags.remove(key).is_some()
    }

    pub fn is_registered(&self, key: &NodeKey) -> bool
    {
        self.flags.contains_key(key)
    }

    pub fn flag(&self, key: &NodeKey) -> Option<bool>
    {
        self.flags.get(key).copied()
    }
}
