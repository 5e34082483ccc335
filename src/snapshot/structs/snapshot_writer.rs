use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct SnapshotWriter {
    pub directory: PathBuf,
    /// Write to `<file>.tmp` first and rename over the target.
    pub atomic: bool,
}
