use serde::Deserialize;
use crate::tracker::structs::node_address::NodeAddress;
use crate::tracker::structs::node_id::NodeId;

/// Mode-independent view of a request body; which fields are required
/// depends on the mode and is checked when building a `TrackerRequest`.
#[derive(Deserialize, Default, Debug)]
pub struct RequestPayload {
    pub node_id: Option<NodeId>,
    #[serde(alias = "addr")]
    pub address: Option<NodeAddress>,
    pub filename: Option<String>,
}
