use crate::tracker::types::LivenessTable;

/// Per-node "checked in since the last sweep" flags.
#[derive(Default, Clone, Debug)]
pub struct LivenessTracker {
    pub flags: LivenessTable,
}
