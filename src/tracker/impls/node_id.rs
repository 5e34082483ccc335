use std::fmt;
use std::fmt::Formatter;
use crate::tracker::structs::node_id::NodeId;

impl NodeId {
    /// Human readable label used as key in the node frequency snapshot.
    pub fn label(&self) -> String {
        format!("node{}", self.0)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for NodeId {
    fn from(data: u64) -> Self {
        NodeId(data)
    }
}
