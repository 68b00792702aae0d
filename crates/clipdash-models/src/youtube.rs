//! YouTube URL validation.
//!
//! The dashboard accepts a pasted YouTube URL before creating a project;
//! rejecting bad URLs client-side saves a round trip to the backend.

use thiserror::Error;

/// Errors from YouTube video-id extraction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum YoutubeUrlError {
    #[error("URL is not a YouTube URL")]
    NotYoutube,

    #[error("no video id found in URL")]
    VideoIdNotFound,

    #[error("video id has invalid format: {0}")]
    InvalidVideoId(String),
}

/// Extract the 11-character video id from a YouTube URL.
///
/// Supported forms:
/// - `https://youtube.com/watch?v=VIDEO_ID`
/// - `https://youtu.be/VIDEO_ID`
/// - `https://youtube.com/embed/VIDEO_ID`
/// - `https://youtube.com/shorts/VIDEO_ID`
///
/// Query parameters and fragments after the id are ignored.
pub fn extract_youtube_id(url: &str) -> Result<String, YoutubeUrlError> {
    let url = url.trim();

    let lowered = url.to_ascii_lowercase();
    if !lowered.contains("youtube.com") && !lowered.contains("youtu.be") {
        return Err(YoutubeUrlError::NotYoutube);
    }

    let candidate = extract_watch_param(url)
        .or_else(|| extract_path_id(url, "youtu.be/"))
        .or_else(|| extract_path_id(url, "/embed/"))
        .or_else(|| extract_path_id(url, "/shorts/"))
        .ok_or(YoutubeUrlError::VideoIdNotFound)?;

    validate_video_id(candidate)
}

/// Pull the id out of a `?v=` / `&v=` query parameter.
fn extract_watch_param(url: &str) -> Option<&str> {
    let pos = url.find("?v=").or_else(|| url.find("&v="))?;
    Some(&url[pos + 3..])
}

/// Pull the id out of the path segment following `marker`.
fn extract_path_id<'a>(url: &'a str, marker: &str) -> Option<&'a str> {
    let pos = url.find(marker)?;
    let rest = &url[pos + marker.len()..];
    if rest.is_empty() {
        None
    } else {
        Some(rest)
    }
}

/// Take the id up to the next delimiter and check its shape.
fn validate_video_id(segment: &str) -> Result<String, YoutubeUrlError> {
    let id: &str = segment
        .split(['&', '?', '#', '/'])
        .next()
        .unwrap_or_default();

    if id.len() != 11 {
        return Err(YoutubeUrlError::InvalidVideoId(id.to_string()));
    }
    if !id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return Err(YoutubeUrlError::InvalidVideoId(id.to_string()));
    }
    Ok(id.to_string())
}
