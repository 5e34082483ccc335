use serde::{Deserialize, Serialize};
use crate::config::structs::directory_config::DirectoryConfig;
use crate::config::structs::http_trackers_config::HttpTrackersConfig;
use crate::config::structs::tracker_config::TrackerConfig;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Configuration {
    pub log_level: String,
    pub log_console_interval: u64,
    pub tracker_config: TrackerConfig,
    pub directory: DirectoryConfig,
    pub http_server: Vec<HttpTrackersConfig>
}
