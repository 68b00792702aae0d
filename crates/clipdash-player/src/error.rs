//! Error types for the playback core.

use thiserror::Error;

/// Result type for playback operations.
pub type PlayerResult<T> = Result<T, PlayerError>;

/// Errors that can occur in an editor session.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlayerError {
    /// The media source could not be loaded or decoded. Terminal for the
    /// session; the caller must open a new session to retry.
    #[error("failed to load media source {url}: {reason}")]
    SourceLoad { url: String, reason: String },

    /// A call was made after teardown. Programming error; log it, do not
    /// try to recover the session.
    #[error("editor session has been torn down")]
    SessionClosed,

    /// A word operation targeted an index outside the transcript. Caller
    /// error; session state is untouched.
    #[error("word index {index} out of range (transcript has {len} words)")]
    IndexOutOfRange { index: usize, len: usize },
}

impl PlayerError {
    /// Create a source-load failure.
    pub fn source_load(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::SourceLoad {
            url: url.into(),
            reason: reason.into(),
        }
    }
}
