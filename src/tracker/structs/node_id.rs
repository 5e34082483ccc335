//! Numeric node identifier.

use serde::{Deserialize, Serialize};

/// The integer a node announces itself with.
///
/// A `NodeId` is not unique on its own: the same id may re-register from a
/// different address, so liveness and ownership are keyed by
/// [`NodeKey`](crate::tracker::structs::node_key::NodeKey) instead.
#[derive(Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
#[serde(transparent)]
pub struct NodeId(pub u64);
