//! E2E error types.

use thiserror::Error;

/// Result type alias for e2e support.
pub type Result<T> = std::result::Result<T, E2eError>;

/// Errors that can occur while loading inputs or talking to the app.
#[derive(Error, Debug)]
pub enum E2eError {
    #[error("inputs are missing '{0}' key")]
    MissingKey(&'static str),

    #[error("index {index} is out of range for input 'users'")]
    IndexOutOfRange { index: usize },

    #[error("input 'users[{index}]' is missing '{field}'")]
    MissingField { index: usize, field: &'static str },

    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
