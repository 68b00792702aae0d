//! Connected social channel data.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The user's connected YouTube channel.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct YoutubeChannel {
    /// Channel identifier
    pub id: String,

    /// Channel title
    pub title: String,

    /// Channel avatar URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,

    /// Subscriber count, when the API exposes it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscriber_count: Option<u64>,
}

/// One upload on a connected channel, shown in the source-video picker.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ChannelVideo {
    /// Video identifier
    pub id: String,

    /// Video title
    pub title: String,

    /// Thumbnail URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,

    /// Publish date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
}
