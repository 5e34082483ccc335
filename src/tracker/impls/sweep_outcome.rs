use crate::tracker::structs::node_id::NodeId;
use crate::tracker::structs::sweep_outcome::SweepOutcome;

impl SweepOutcome {
    pub fn is_empty(&self) -> bool
    {
        self.alive.is_empty() && self.evicted.is_empty()
    }

    pub fn evicted_ids(&self) -> Vec<NodeId>
    {
        let mut ids: Vec<NodeId> = self.evicted.iter().map(|key| key.node_id).collect();
        ids.dedup();
        ids
    }
}
