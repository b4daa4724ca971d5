//! Typed errors for the books API client

use thiserror::Error;

/// Errors returned by books API calls
///
/// Cloneable so results can travel inside application messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Connection, timeout, or other request-level failure
    #[error("request failed: {0}")]
    Transport(String),

    /// The server answered with a non-success status
    #[error("server returned {status} for {endpoint}")]
    Status { endpoint: String, status: u16 },

    /// The response body could not be decoded
    #[error("malformed response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}
