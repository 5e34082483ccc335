use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub started: i64,
    pub timestamp_run_sweep: i64,
    pub files: i64,
    pub nodes: i64,
    pub own_handled: i64,
    pub need_handled: i64,
    pub update_handled: i64,
    pub register_handled: i64,
    pub exit_handled: i64,
    pub invalid_requests: i64,
    pub invalid_modes: i64,
    pub sweeps: i64,
    pub nodes_evicted: i64,
    pub snapshots_written: i64,
    pub snapshot_failures: i64,
}
