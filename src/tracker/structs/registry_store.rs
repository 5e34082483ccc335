use crate::tracker::types::{FileOwnership, RequestFrequencyCounter};

/// File ownership and request frequency tables.
///
/// Not synchronised by itself; it lives inside
/// [`TrackerState`](crate::tracker::structs::tracker_state::TrackerState) behind the tracker lock.
#[derive(Default, Clone, Debug)]
pub struct RegistryStore {
    pub files: FileOwnership,
    pub frequencies: RequestFrequencyCounter,
}
