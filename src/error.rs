//! Error types for the shared store and the countdown capability.
//!
//! Pipeline operations never surface these to their callers; they are logged
//! and absorbed into empty or no-op results.

use thiserror::Error;

use crate::activity::ActivityId;

/// Failures reading or writing the shared preferences file.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to access shared preferences: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse shared preferences: {0}")]
    Json(#[from] serde_json::Error),

    #[error("shared preferences root is not a JSON object")]
    NotAnObject,

    #[error("app-group container is not available")]
    NoContainer,
}

/// Failures reported by the host's countdown capability.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CountdownError {
    #[error("live countdowns are not supported on this host")]
    Unsupported,

    #[error("host rejected the countdown request: {0}")]
    Rejected(String),

    #[error("countdown {0} is no longer active")]
    NotFound(ActivityId),
}
