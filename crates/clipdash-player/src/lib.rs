//! Playback synchronization core for the clip editor.
//!
//! This crate provides:
//! - A single authoritative playback cursor per editor session
//! - Clock-of-record vs follower discipline for media elements
//! - Word-level transcript lookup and editing
//! - Change notification for reactive renderers
//!
//! The editor shows one piece of media through several renderers at once
//! (audio waveform, original video, cropped preview, transcript list,
//! subtitle overlay). [`EditorSession`] is the only writer of playback
//! state: renderers read snapshots and submit intents, and exactly one
//! attached element is the clock of record at any instant. That discipline
//! is what keeps the renderers from drifting apart.
//!
//! Everything here is synchronous and single-threaded; "concurrency" in the
//! editor means interleaved event callbacks, not threads.

pub mod cursor;
pub mod element;
pub mod error;
pub mod session;

pub use cursor::PlayerSnapshot;
pub use element::{MediaElement, MediaLoader};
pub use error::{PlayerError, PlayerResult};
pub use session::EditorSession;
