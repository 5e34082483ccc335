use std::collections::BTreeSet;
use crate::tracker::structs::node_id::NodeId;
use crate::tracker::structs::node_key::NodeKey;

/// Result of one liveness sweep.
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct SweepOutcome {
    /// Nodes that had checked in; their flags were reset.
    pub alive: BTreeSet<NodeId>,
    /// Nodes that had not checked in and were removed everywhere.
    pub evicted: Vec<NodeKey>,
}
