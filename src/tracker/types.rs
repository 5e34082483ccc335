//! Type aliases for the registry tables.
//!
//! Ordered maps and sets keep snapshots and search results deterministic.

use std::collections::{BTreeMap, BTreeSet};
use crate::tracker::structs::node_id::NodeId;
use crate::tracker::structs::node_key::NodeKey;

/// "This node owns this file."
pub type OwnershipEntry = NodeKey;

/// Filename to its owners. A filename never maps to an empty set.
pub type FileOwnership = BTreeMap<String, BTreeSet<OwnershipEntry>>;

/// Node id to the number of `UPDATE` requests it reported.
pub type RequestFrequencyCounter = BTreeMap<NodeId, u64>;

/// Node key to whether it checked in since the last sweep.
pub type LivenessTable = BTreeMap<NodeKey, bool>;
