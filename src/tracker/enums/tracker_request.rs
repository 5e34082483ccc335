use crate::tracker::structs::node_address::NodeAddress;
use crate::tracker::structs::node_id::NodeId;

/// A validated coordination request, one variant per mode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TrackerRequest {
    Own { node_id: NodeId, address: NodeAddress, filename: String },
    Need { node_id: NodeId, filename: String },
    Update { node_id: NodeId },
    Register { node_id: NodeId, address: NodeAddress },
    Exit { node_id: NodeId, address: NodeAddress },
}
