use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DirectoryConfig {
    pub tracker_db_dir: String,
    pub logs_dir: String,
}
