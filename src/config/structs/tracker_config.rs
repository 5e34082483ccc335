use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TrackerConfig {
    /// Seconds between two liveness sweeps.
    pub sweep_interval: u64,
    /// Persist a snapshot after every `UPDATE` request.
    pub snapshot_on_update: bool,
    /// Write snapshots to a temporary file and rename it into place.
    pub atomic_snapshots: bool,
}
