use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Invalid mode: {0}")]
    InvalidMode(String),

    #[error("Snapshot error: {0}")]
    Snapshot(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
