use std::collections::BTreeMap;
use serde::Serialize;
use crate::tracker::types::OwnershipEntry;

/// Point-in-time copy of the registry, detached from the tracker lock.
#[derive(Serialize, Default, Clone, Debug, PartialEq, Eq)]
pub struct RegistrySnapshot {
    pub nodes: BTreeMap<String, u64>,
    pub files: BTreeMap<String, Vec<OwnershipEntry>>,
}
