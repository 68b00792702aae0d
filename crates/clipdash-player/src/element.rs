//! Media element and loader traits.
//!
//! The session drives concrete playback facilities (a decoded-audio
//! waveform engine, plain video surfaces) through these seams. Any element
//! can serve either role: clock of record, emitting authoritative time
//! updates, or follower, whose position is only ever set by the session.

use crate::error::PlayerResult;

/// One attached playback surface.
///
/// Implementations wrap whatever actually decodes and presents media. The
/// session issues every command an element receives; followers must never
/// advance their own position ("free-run") between commands.
pub trait MediaElement {
    /// Short name for log lines ("waveform", "cropped-preview", ...).
    fn label(&self) -> &str;

    /// The element's current position in seconds.
    fn current_time(&self) -> f64;

    /// Media length in seconds, 0 until the element has loaded metadata.
    fn duration(&self) -> f64 {
        0.0
    }

    /// Move the element's position to `time` seconds.
    fn seek(&mut self, time: f64);

    /// Start or stop playback.
    fn set_playing(&mut self, playing: bool);

    /// Mute or unmute the element's audio.
    fn set_muted(&mut self, muted: bool);

    /// Elements that never emit audio (the silent original-video pane)
    /// return true and are skipped by mute toggles.
    fn always_muted(&self) -> bool {
        false
    }

    /// Release decoded buffers and detach event listeners. Called exactly
    /// once, during session teardown.
    fn release(&mut self) {}
}

/// Loads a media URL into an element that can act as the initial clock of
/// record.
///
/// A load failure is terminal for the session being opened: the session is
/// never created and the caller decides whether to offer a retry. There is
/// no retry loop behind this trait.
pub trait MediaLoader {
    fn load(&self, url: &str) -> PlayerResult<Box<dyn MediaElement>>;
}
