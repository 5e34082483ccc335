use std::fmt;
use std::fmt::Formatter;
use crate::tracker::structs::node_address::NodeAddress;
use crate::tracker::structs::node_id::NodeId;
use crate::tracker::structs::node_key::NodeKey;

impl NodeKey {
    pub fn new(node_id: NodeId, address: NodeAddress) -> NodeKey {
        NodeKey { node_id, address }
    }
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{} ({})", self.node_id, self.address)
    }
}
