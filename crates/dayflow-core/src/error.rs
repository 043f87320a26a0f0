//! Core error types for dayflow-core.
//!
//! Most planner operations are best-effort by design and report "nothing
//! happened" through their return values rather than through errors. The
//! error types here cover the cases that do need to surface: persistence
//! writes and clock-time parsing.

use std::path::PathBuf;
use thiserror::Error;

use crate::task::ParseClockTimeError;

/// Core error type for dayflow-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Persistence errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Invalid wall-clock time input
    #[error("Invalid clock time: {0}")]
    ClockTime(#[from] ParseClockTimeError),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Persistence-specific errors.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing a state file failed
    #[error("Failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Encoding state to JSON failed
    #[error("Failed to serialize state: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
