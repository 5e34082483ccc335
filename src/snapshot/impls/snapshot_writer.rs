use std::fs;
use std::path::PathBuf;
use log::debug;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use crate::snapshot::structs::registry_snapshot::RegistrySnapshot;
use crate::snapshot::structs::snapshot_writer::SnapshotWriter;
use crate::tracker::enums::tracker_error::TrackerError;

pub const NODES_SNAPSHOT_FILE: &str = "nodes.json";
pub const FILES_SNAPSHOT_FILE: &str = "files.json";

impl SnapshotWriter {
    pub fn new(directory: impl Into<PathBuf>, atomic: bool) -> SnapshotWriter
    {
        SnapshotWriter { directory: directory.into(), atomic }
    }

    pub fn nodes_path(&self) -> PathBuf
    {
        self.directory.join(NODES_SNAPSHOT_FILE)
    }

    pub fn files_path(&self) -> PathBuf
    {
        self.directory.join(FILES_SNAPSHOT_FILE)
    }

    /// Overwrites both snapshot files with `snapshot`.
    pub fn write(&self, snapshot: &RegistrySnapshot) -> Result<(), TrackerError>
    {
        fs::create_dir_all(&self.directory)?;
        self.write_file(NODES_SNAPSHOT_FILE, &Self::encode(&snapshot.nodes)?)?;
        self.write_file(FILES_SNAPSHOT_FILE, &Self::encode(&snapshot.files)?)?;
        debug!("[SNAPSHOT] Wrote {} node(s) and {} file(s) to {}", snapshot.nodes.len(), snapshot.files.len(), self.directory.display());
        Ok(())
    }

    pub fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>, TrackerError>
    {
        let mut buffer = Vec::new();
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(b"    "));
        value.serialize(&mut serializer)?;
        Ok(buffer)
    }

    fn write_file(&self, name: &str, data: &[u8]) -> Result<(), TrackerError>
    {
        let target = self.directory.join(name);
        if self.atomic {
            let temporary = self.directory.join(format!("{name}.tmp"));
            fs::write(&temporary, data)?;
            fs::rename(&temporary, &target)?;
        } else {
            fs::write(&target, data)?;
        }
        Ok(())
    }
}
