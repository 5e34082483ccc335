//! Address-qualified node identity.

use serde::{Deserialize, Serialize};
use crate::tracker::structs::node_address::NodeAddress;
use crate::tracker::structs::node_id::NodeId;

/// A `(node_id, address)` pair.
///
/// This is both the liveness key and the value stored per filename in the
/// ownership table (see [`OwnershipEntry`](crate::tracker::types::OwnershipEntry)).
/// Serialized as `{"node_id": 1, "address": ["127.0.0.1", 6881]}`.
#[derive(Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Debug)]
pub struct NodeKey {
    pub node_id: NodeId,
    #[serde(alias = "addr")]
    pub address: NodeAddress,
}
