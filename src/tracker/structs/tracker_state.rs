use crate::tracker::structs::liveness_tracker::LivenessTracker;
use crate::tracker::structs::registry_store::RegistryStore;

/// All mutable coordination state, guarded as one unit.
///
/// Keeping the registry and the liveness flags under a single lock is what
/// makes an eviction (ownership removal plus unregister) atomic for readers.
#[derive(Default, Clone, Debug)]
pub struct TrackerState {
    pub registry: RegistryStore,
    pub liveness: LivenessTracker,
}
