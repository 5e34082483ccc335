//! Network endpoint of a node.

use serde::{Deserialize, Serialize};

/// Host and port a node serves its files on.
///
/// On the wire the address is a two element array, `["127.0.0.1", 6881]`.
#[derive(Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Debug)]
#[serde(from = "(String, u16)", into = "(String, u16)")]
pub struct NodeAddress {
    pub host: String,
    pub port: u16,
}
