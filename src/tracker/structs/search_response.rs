use serde::Serialize;
use crate::tracker::structs::node_id::NodeId;
use crate::tracker::types::OwnershipEntry;

/// Answer to a `NEED` request.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct SearchResponse {
    pub dest_node_id: NodeId,
    pub search_result: Vec<(OwnershipEntry, u64)>,
    pub filename: String,
}
