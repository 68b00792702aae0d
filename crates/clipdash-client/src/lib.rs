//! HTTP client for the ClipDash backend API.
//!
//! This crate provides:
//! - [`ApiClient`]: a thin typed wrapper over the backend's REST endpoints
//!   (auth, videos/candidates, clips, channels) with bearer-token auth
//! - [`watch`]: caller-owned polling for backend jobs (editor preparation,
//!   clip renders), bounded by a configurable deadline
//! - [`auth`]: the Google OAuth consent-URL builder for the login flow
//!
//! The playback core never polls the backend itself; the watchers here are
//! the loops its callers own.

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod watch;

pub use auth::GoogleAuthConfig;
pub use client::ApiClient;
pub use config::ClientConfig;
pub use error::{ApiError, ApiResult, WatchError};
pub use watch::{wait_for_editor_ready, wait_for_renders, PollConfig};
