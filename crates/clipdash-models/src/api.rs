//! API request/response payloads shared between the client and the views.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::clip::SocialPlatform;

/// Request to create a new project from a YouTube URL.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Validate)]
pub struct CreateVideoRequest {
    /// Source video URL
    #[validate(url)]
    pub youtube_url: String,
}

/// Request to update a rendered clip's review fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct UpdateClipRequest {
    /// New caption, if changing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,

    /// New approval state, if changing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_approved: Option<bool>,
}

/// Request to publish a rendered clip.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PublishClipRequest {
    /// Target platform
    pub platform: SocialPlatform,
}

/// Request to exchange a Google OAuth authorization code for an API token.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct TokenExchangeRequest {
    /// Authorization code from the OAuth redirect
    pub code: String,

    /// Redirect URI the code was issued for
    pub redirect_uri: String,
}

/// Bearer token issued by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AuthToken {
    /// Opaque access token
    pub access_token: String,

    /// Token type, always "bearer"
    pub token_type: String,
}

/// The authenticated user.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct User {
    /// User identifier
    pub id: String,

    /// Account email
    pub email: String,

    /// Display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Avatar URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
}
