//! Error types for API calls and job watchers.

use std::time::Duration;

use thiserror::Error;

use clipdash_models::YoutubeUrlError;

/// Result type for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors from talking to the backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure (connect, timeout, body decode)
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend rejected our token; the caller should drop the stored
    /// token and send the user back through login.
    #[error("unauthorized")]
    Unauthorized,

    /// Non-2xx response with the backend's `detail` message when present
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Submitted video URL is not a usable YouTube URL
    #[error("invalid video URL: {0}")]
    InvalidUrl(#[from] YoutubeUrlError),

    /// Client misconfiguration (bad base URL)
    #[error("invalid client config: {0}")]
    InvalidConfig(String),
}

impl ApiError {
    /// Create an API-level error.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }
}

/// Errors from the job watchers.
#[derive(Debug, Error)]
pub enum WatchError {
    /// The job did not reach the waited-for state before the deadline;
    /// carries the time actually spent waiting. The caller surfaces a
    /// "preparation failed/timed out" state; there is no automatic retry.
    #[error("gave up waiting after {0:?}")]
    Timeout(Duration),

    #[error(transparent)]
    Api(#[from] ApiError),
}
