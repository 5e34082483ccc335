use std::sync::atomic::AtomicI64;

#[derive(Debug, Default)]
pub struct StatsAtomics {
    pub started: AtomicI64,
    pub timestamp_run_sweep: AtomicI64,
    pub files: AtomicI64,
    pub nodes: AtomicI64,
    pub own_handled: AtomicI64,
    pub need_handled: AtomicI64,
    pub update_handled: AtomicI64,
    pub register_handled: AtomicI64,
    pub exit_handled: AtomicI64,
    pub invalid_requests: AtomicI64,
    pub invalid_modes: AtomicI64,
    pub sweeps: AtomicI64,
    pub nodes_evicted: AtomicI64,
    pub snapshots_written: AtomicI64,
    pub snapshot_failures: AtomicI64,
}
