use crate::snapshot::structs::registry_snapshot::RegistrySnapshot;
use crate::tracker::structs::registry_store::RegistryStore;

impl From<&RegistryStore> for RegistrySnapshot {
    fn from(registry: &RegistryStore) -> Self {
        RegistrySnapshot {
            nodes: registry.frequencies.iter()
                .map(|(node_id, count)| (node_id.label(), *count))
                .collect(),
            files: registry.files.iter()
                .map(|(filename, owners)| (filename.clone(), owners.iter().cloned().collect()))
                .collect(),
        }
    }
}
