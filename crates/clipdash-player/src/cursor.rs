//! The playback cursor and its read-only snapshot.

/// Mutable playback state. Owned exclusively by the session; everything
/// outside the session sees only [`PlayerSnapshot`] copies.
#[derive(Debug, Clone, Default)]
pub(crate) struct PlaybackCursor {
    /// Current position in seconds, always within `[0, duration]`
    pub current_time: f64,
    /// Media length in seconds; 0 until the source reports metadata
    pub duration: f64,
    pub is_playing: bool,
    pub is_muted: bool,
}

impl PlaybackCursor {
    /// Clamp a requested time into the playable range. While the duration
    /// is still unknown only the lower bound applies.
    pub fn clamp(&self, time: f64) -> f64 {
        if self.duration > 0.0 {
            time.clamp(0.0, self.duration)
        } else {
            time.max(0.0)
        }
    }

    pub fn snapshot(&self) -> PlayerSnapshot {
        PlayerSnapshot {
            current_time: self.current_time,
            duration: self.duration,
            is_playing: self.is_playing,
            is_muted: self.is_muted,
        }
    }
}

/// Read-only copy of the playback state, broadcast to renderers on every
/// change.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlayerSnapshot {
    /// Current position in seconds
    pub current_time: f64,
    /// Media length in seconds; 0 until known
    pub duration: f64,
    /// Whether the clock of record is playing
    pub is_playing: bool,
    /// Whether audio-bearing elements are muted
    pub is_muted: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_with_known_duration() {
        let cursor = PlaybackCursor {
            duration: 42.0,
            ..Default::default()
        };
        assert_eq!(cursor.clamp(-5.0), 0.0);
        assert_eq!(cursor.clamp(1000.0), 42.0);
        assert_eq!(cursor.clamp(10.0), 10.0);
    }

    #[test]
    fn test_clamp_before_metadata() {
        let cursor = PlaybackCursor::default();
        assert_eq!(cursor.clamp(-1.0), 0.0);
        // Upper bound cannot apply until the duration is known
        assert_eq!(cursor.clamp(1000.0), 1000.0);
    }
}
