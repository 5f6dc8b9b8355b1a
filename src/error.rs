// Error types for the tabgate application.
// Navigation never errors (invalid input degrades to a no-op); this enum
// covers stop registration and the config/log file plumbing.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TabgateError {
    #[error("stop id must not be empty")]
    EmptyStopId,

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TabgateError>;
