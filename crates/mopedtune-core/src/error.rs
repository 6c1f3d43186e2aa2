//! Error types for tuning calculations

use thiserror::Error;

/// Errors that can occur while loading tuning data or calculating a result
#[derive(Error, Debug)]
pub enum TuningError {
    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    #[error("Invalid tuning data: {0}")]
    InvalidTuningData(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
