//! Shared data models for the ClipDash dashboard.
//!
//! This crate provides Serde-serializable types for:
//! - Word-level transcripts and clip candidates
//! - Projects and their pipeline status
//! - Rendered clips and publish targets
//! - API request/response payloads
//! - Timestamp formatting and YouTube URL validation

pub mod api;
pub mod candidate;
pub mod channel;
pub mod clip;
pub mod project;
pub mod timestamp;
pub mod transcript;
pub mod word;
pub mod youtube;

// Re-export common types
pub use api::{
    AuthToken, CreateVideoRequest, PublishClipRequest, TokenExchangeRequest, UpdateClipRequest,
    User,
};
pub use candidate::ClipCandidate;
pub use channel::{ChannelVideo, YoutubeChannel};
pub use clip::{Clip, SocialPlatform};
pub use project::{Project, ProjectStatus};
pub use timestamp::{format_clock, format_seconds, parse_timestamp, TimestampError};
pub use transcript::Transcript;
pub use word::Word;
pub use youtube::{extract_youtube_id, YoutubeUrlError};
