//! The typed API client.
//!
//! One method per backend endpoint the dashboard calls, grouped the way the
//! pages use them: auth, videos/candidates, clips, channels. All methods are
//! `async` and return [`ApiResult`].

use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};
use url::Url;

use clipdash_models::{
    extract_youtube_id, AuthToken, ChannelVideo, Clip, ClipCandidate, CreateVideoRequest, Project,
    PublishClipRequest, SocialPlatform, TokenExchangeRequest, UpdateClipRequest, User,
    YoutubeChannel,
};

use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult};

/// Typed HTTP client for the ClipDash backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    token: Option<String>,
}

impl ApiClient {
    /// Create a client from config. No token is attached yet; see
    /// [`ApiClient::with_token`].
    pub fn new(config: &ClientConfig) -> ApiResult<Self> {
        let base_url = config.parsed_base_url()?;
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self {
            http,
            base_url,
            token: None,
        })
    }

    /// Attach a bearer token to every subsequent request.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Replace or clear the stored token.
    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    // --- auth ---

    /// Exchange a Google OAuth authorization code for an API token.
    pub async fn exchange_google_token(
        &self,
        code: impl Into<String>,
        redirect_uri: impl Into<String>,
    ) -> ApiResult<AuthToken> {
        let body = TokenExchangeRequest {
            code: code.into(),
            redirect_uri: redirect_uri.into(),
        };
        self.post_json("/api/v1/auth/google/token", &body).await
    }

    /// Fetch the authenticated user.
    pub async fn me(&self) -> ApiResult<User> {
        self.get("/api/v1/auth/me").await
    }

    /// Invalidate the current token server-side.
    pub async fn logout(&self) -> ApiResult<()> {
        self.post_empty("/api/v1/auth/logout").await
    }

    // --- videos / candidates ---

    /// List the user's projects.
    pub async fn list_videos(&self) -> ApiResult<Vec<Project>> {
        self.get("/api/v1/videos/").await
    }

    /// Fetch one project.
    pub async fn get_video(&self, project_id: &str) -> ApiResult<Project> {
        self.get(&format!("/api/v1/videos/{project_id}")).await
    }

    /// Submit a YouTube URL as a new project.
    ///
    /// The URL is validated locally first; an unusable URL never reaches
    /// the backend.
    pub async fn create_video(&self, youtube_url: &str) -> ApiResult<Project> {
        let video_id = extract_youtube_id(youtube_url)?;
        debug!(video_id, "submitting source video");
        let body = CreateVideoRequest {
            youtube_url: youtube_url.to_string(),
        };
        self.post_json("/api/v1/videos/", &body).await
    }

    /// Kick off candidate analysis for a project.
    pub async fn analyze_video(&self, project_id: &str) -> ApiResult<()> {
        self.post_empty(&format!("/api/v1/videos/{project_id}/analyze"))
            .await
    }

    /// List a project's clip candidates.
    pub async fn candidates(&self, project_id: &str) -> ApiResult<Vec<ClipCandidate>> {
        self.get(&format!("/api/v1/videos/{project_id}/candidates"))
            .await
    }

    /// Fetch one candidate (the editor page's refresh call).
    pub async fn get_candidate(&self, candidate_id: u64) -> ApiResult<ClipCandidate> {
        self.get(&format!("/api/v1/videos/candidates/{candidate_id}"))
            .await
    }

    /// Enqueue the final render for a candidate.
    pub async fn render_clip(&self, candidate_id: u64) -> ApiResult<()> {
        self.post_empty(&format!("/api/v1/videos/candidates/{candidate_id}/render"))
            .await
    }

    /// Enqueue editor preparation (cropped draft + transcript) for a
    /// candidate. Completion is observed by polling; see [`crate::watch`].
    pub async fn prepare_editor(&self, candidate_id: u64) -> ApiResult<()> {
        self.post_empty(&format!(
            "/api/v1/videos/candidates/{candidate_id}/prepare-editor"
        ))
        .await
    }

    // --- clips ---

    /// Fetch a rendered clip.
    pub async fn get_clip(&self, clip_id: u64) -> ApiResult<Clip> {
        self.get(&format!("/api/v1/clips/{clip_id}")).await
    }

    /// Update a clip's caption/approval.
    pub async fn update_clip(&self, clip_id: u64, update: &UpdateClipRequest) -> ApiResult<Clip> {
        let url = self.endpoint(&format!("/api/v1/clips/{clip_id}"))?;
        let response = self
            .authorized(self.http.request(Method::PATCH, url))
            .json(update)
            .send()
            .await?;
        Self::parse(response).await
    }

    /// Publish a rendered clip to a platform.
    pub async fn publish_clip(&self, clip_id: u64, platform: SocialPlatform) -> ApiResult<()> {
        let body = PublishClipRequest { platform };
        let url = self.endpoint(&format!("/api/v1/clips/{clip_id}/publish"))?;
        let response = self
            .authorized(self.http.post(url))
            .json(&body)
            .send()
            .await?;
        Self::check(response).await
    }

    // --- channels ---

    /// Fetch the connected YouTube channel.
    pub async fn youtube_channel(&self) -> ApiResult<YoutubeChannel> {
        self.get("/api/v1/channels/youtube").await
    }

    /// Disconnect the YouTube channel.
    pub async fn disconnect_youtube(&self) -> ApiResult<()> {
        let url = self.endpoint("/api/v1/channels/youtube")?;
        let response = self.authorized(self.http.delete(url)).send().await?;
        Self::check(response).await
    }

    /// Re-run the YouTube OAuth connection.
    pub async fn reconnect_youtube(&self) -> ApiResult<()> {
        self.post_empty("/api/v1/channels/youtube/reconnect").await
    }

    /// List recent uploads on the connected channel.
    pub async fn channel_videos(&self, max_results: u32) -> ApiResult<Vec<ChannelVideo>> {
        self.get(&format!(
            "/api/v1/channels/youtube/videos?max_results={max_results}"
        ))
        .await
    }

    // --- plumbing ---

    fn endpoint(&self, path: &str) -> ApiResult<Url> {
        self.base_url
            .join(path)
            .map_err(|e| ApiError::InvalidConfig(format!("bad endpoint path {path:?}: {e}")))
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let url = self.endpoint(path)?;
        let response = self.authorized(self.http.get(url)).send().await?;
        Self::parse(response).await
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let url = self.endpoint(path)?;
        let response = self.authorized(self.http.post(url)).json(body).send().await?;
        Self::parse(response).await
    }

    async fn post_empty(&self, path: &str) -> ApiResult<()> {
        let url = self.endpoint(path)?;
        let response = self.authorized(self.http.post(url)).send().await?;
        Self::check(response).await
    }

    async fn parse<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
        let response = Self::error_for_status(response).await?;
        Ok(response.json().await?)
    }

    async fn check(response: Response) -> ApiResult<()> {
        Self::error_for_status(response).await.map(|_| ())
    }

    /// Map non-2xx responses into the error taxonomy, pulling the backend's
    /// `detail` message out of the body when there is one.
    async fn error_for_status(response: Response) -> ApiResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        if status == StatusCode::UNAUTHORIZED {
            warn!("token rejected by backend");
            return Err(ApiError::Unauthorized);
        }
        let message = match response.json::<serde_json::Value>().await {
            Ok(body) => body
                .get("detail")
                .and_then(|d| d.as_str())
                .unwrap_or("request failed")
                .to_string(),
            Err(_) => "request failed".to_string(),
        };
        Err(ApiError::api(status.as_u16(), message))
    }
}
