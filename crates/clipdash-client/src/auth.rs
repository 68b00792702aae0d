//! Google OAuth consent-URL builder for the login flow.

/// Scopes the dashboard asks for: identity plus read-only channel access
/// for the source-video picker.
const SCOPES: &str = "openid email profile https://www.googleapis.com/auth/youtube.readonly";

/// Google OAuth client settings.
#[derive(Debug, Clone)]
pub struct GoogleAuthConfig {
    /// OAuth client id
    pub client_id: String,
    /// Redirect URI registered for the dashboard
    pub redirect_uri: String,
}

impl GoogleAuthConfig {
    /// Create config from environment variables (`GOOGLE_CLIENT_ID`,
    /// `OAUTH_REDIRECT_URI`).
    pub fn from_env() -> Option<Self> {
        Some(Self {
            client_id: std::env::var("GOOGLE_CLIENT_ID").ok()?,
            redirect_uri: std::env::var("OAUTH_REDIRECT_URI").ok()?,
        })
    }

    /// The consent URL to send the user to. The code that comes back on the
    /// redirect goes through [`crate::ApiClient::exchange_google_token`].
    pub fn consent_url(&self) -> String {
        format!(
            "https://accounts.google.com/o/oauth2/v2/auth\
             ?client_id={}\
             &redirect_uri={}\
             &response_type=code\
             &scope={}\
             &access_type=offline\
             &prompt=consent",
            urlencoding::encode(&self.client_id),
            urlencoding::encode(&self.redirect_uri),
            urlencoding::encode(SCOPES),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consent_url_encodes_parameters() {
        let config = GoogleAuthConfig {
            client_id: "abc123.apps.googleusercontent.com".to_string(),
            redirect_uri: "http://localhost:3000/auth/callback".to_string(),
        };
        let url = config.consent_url();
        assert!(url.starts_with("https://accounts.google.com/o/oauth2/v2/auth?"));
        assert!(url.contains("redirect_uri=http%3A%2F%2Flocalhost%3A3000%2Fauth%2Fcallback"));
        assert!(url.contains("youtube.readonly"));
        assert!(url.contains("prompt=consent"));
    }
}
