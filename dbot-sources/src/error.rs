//! Source error types.
//!
//! Produced by the adapters' `fetch` methods. The [`crate::source`] trait impls log these at
//! warning level and map them to "not found"; they never reach the query handler.

use thiserror::Error;

/// Errors that can occur while querying one lookup source.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Request timed out after {0:?}")]
    Timeout(std::time::Duration),

    #[error("Unexpected status: {0}")]
    Status(u16),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Invalid lexicon record: {0}")]
    InvalidRecord(String),
}

impl SourceError {
    /// Maps a reqwest error, separating timeouts from other transport failures.
    pub(crate) fn from_request(error: reqwest::Error, timeout: std::time::Duration) -> Self {
        if error.is_timeout() {
            Self::Timeout(timeout)
        } else {
            Self::Transport(error)
        }
    }
}
