//! Rendered clips and publish targets.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Social platform a rendered clip can be published to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SocialPlatform {
    Tiktok,
    Youtube,
    Instagram,
}

impl SocialPlatform {
    /// Returns the platform as a string for display and API payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tiktok => "tiktok",
            Self::Youtube => "youtube",
            Self::Instagram => "instagram",
        }
    }
}

/// A rendered clip file, ready for review and publishing.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Clip {
    /// Clip identifier
    pub id: u64,

    /// The candidate this clip was rendered from
    pub candidate_id: u64,

    /// Location of the rendered video file
    pub file_path: String,

    /// User-written caption for publishing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,

    /// Whether the user approved the clip for publishing
    pub is_approved: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&SocialPlatform::Tiktok).unwrap(),
            "\"tiktok\""
        );
        assert_eq!(SocialPlatform::Instagram.as_str(), "instagram");
    }
}
