#![allow(dead_code)]
use std::sync::Arc;
use serde_json::{json, Value};
use tempfile::TempDir;
use p2p_tracker::config::structs::configuration::Configuration;
use p2p_tracker::tracker::structs::node_address::NodeAddress;
use p2p_tracker::tracker::structs::node_id::NodeId;
use p2p_tracker::tracker::structs::node_key::NodeKey;
use p2p_tracker::tracker::structs::torrent_tracker::TorrentTracker;

pub type TestTracker = Arc<TorrentTracker>;
pub type TestConfig = Arc<Configuration>;

/// Default configuration with snapshots redirected into `dir`.
pub fn create_test_config(dir: &TempDir) -> TestConfig {
    let mut config = Configuration::init();
    config.directory.tracker_db_dir = dir.path().join("tracker_db").to_string_lossy().to_string();
    config.directory.logs_dir = dir.path().join("logs").to_string_lossy().to_string();
    config.http_server[0].bind_address = "127.0.0.1:0".to_string();
    config.http_server[0].threads = 1;
    Arc::new(config)
}

/// The returned directory must be kept alive for as long as the tracker writes snapshots.
pub fn create_test_tracker() -> (TestTracker, TempDir) {
    let dir = tempfile::tempdir().expect("temp dir");
    let tracker = Arc::new(TorrentTracker::new(create_test_config(&dir)));
    (tracker, dir)
}

pub fn node_key(id: u64, port: u16) -> NodeKey {
    NodeKey::new(NodeId(id), NodeAddress::new("127.0.0.1", port))
}

pub fn own_request(id: u64, port: u16, filename: &str) -> Value {
    json!({"mode": "OWN", "node_id": id, "address": ["127.0.0.1", port], "filename": filename})
}

pub fn need_request(id: u64, filename: &str) -> Value {
    json!({"mode": "NEED", "node_id": id, "filename": filename})
}

pub fn update_request(id: u64) -> Value {
    json!({"mode": "UPDATE", "node_id": id})
}

pub fn register_request(id: u64, port: u16) -> Value {
    json!({"mode": "REGISTER", "node_id": id, "address": ["127.0.0.1", port]})
}

pub fn exit_request(id: u64, port: u16) -> Value {
    json!({"mode": "EXIT", "node_id": id, "address": ["127.0.0.1", port]})
}

pub fn send(tracker: &TorrentTracker, request: Value) -> Value {
    let response = tracker.handle_message(request.to_string().as_bytes()).expect("request accepted");
    serde_json::to_value(response).expect("response serializes")
}

pub fn read_snapshot(dir: &TempDir, name: &str) -> Value {
    let data = std::fs::read(dir.path().join("tracker_db").join(name)).expect("snapshot exists");
    serde_json::from_slice(&data).expect("snapshot is json")
}
