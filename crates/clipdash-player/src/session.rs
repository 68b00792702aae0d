//! The editor session: single writer of playback state.
//!
//! One session exists per open editor, bound to one prepared candidate. It
//! owns the cursor and the transcript, holds the clock of record plus any
//! number of followers, and broadcasts a snapshot after every state change.
//! Renderers never touch elements or cursor fields directly; they submit
//! intents through the methods here.

use tracing::{debug, trace};

use clipdash_models::{Transcript, Word};

use crate::cursor::{PlaybackCursor, PlayerSnapshot};
use crate::element::{MediaElement, MediaLoader};
use crate::error::{PlayerError, PlayerResult};

type ChangeListener = Box<dyn Fn(PlayerSnapshot)>;

/// Playback/transcript coordinator for one open editor.
///
/// Lifecycle: [`EditorSession::load`] → active → [`EditorSession::teardown`].
/// After teardown every method fails with [`PlayerError::SessionClosed`].
pub struct EditorSession {
    cursor: PlaybackCursor,
    transcript: Transcript,
    /// The one element whose time updates drive the cursor.
    clock: Box<dyn MediaElement>,
    /// Elements whose position is only ever set by this session.
    followers: Vec<Box<dyn MediaElement>>,
    listeners: Vec<ChangeListener>,
    closed: bool,
}

impl EditorSession {
    /// Bind a media source and its transcript.
    ///
    /// The loaded element becomes the initial clock of record (typically a
    /// plain media surface; the waveform engine is promoted over it later
    /// via [`EditorSession::promote_clock`] once its decode finishes).
    /// Fails with [`PlayerError::SourceLoad`] if the source cannot be
    /// loaded; the failure is terminal, open a new session to retry.
    pub fn load(
        loader: &dyn MediaLoader,
        url: &str,
        transcript: Transcript,
    ) -> PlayerResult<Self> {
        let clock = loader.load(url)?;
        let cursor = PlaybackCursor {
            duration: clock.duration(),
            ..Default::default()
        };
        debug!(
            url,
            clock = clock.label(),
            duration = cursor.duration,
            words = transcript.len(),
            "editor session loaded"
        );
        Ok(Self {
            cursor,
            transcript,
            clock,
            followers: Vec::new(),
            listeners: Vec::new(),
            closed: false,
        })
    }

    /// Attach a follower element.
    ///
    /// The follower is brought in line immediately: seeked to the current
    /// position and given the current play/mute state, so the consistency
    /// invariant holds from the moment it is attached.
    pub fn attach_follower(&mut self, mut element: Box<dyn MediaElement>) -> PlayerResult<()> {
        self.ensure_open()?;
        element.seek(self.cursor.current_time);
        element.set_playing(self.cursor.is_playing);
        if !element.always_muted() {
            element.set_muted(self.cursor.is_muted);
        }
        debug!(follower = element.label(), "follower attached");
        self.followers.push(element);
        Ok(())
    }

    /// Hand the clock of record to a new element.
    ///
    /// Called when the waveform engine finishes loading: the plain media
    /// element that carried time until now is demoted to follower and the
    /// waveform takes over. The incoming clock is seeked to the current
    /// position *before* promotion, so the first update it emits continues
    /// from where the old clock left off and no visible jump occurs. Its
    /// duration is adopted when it reports one (decoded audio knows the
    /// length more precisely than a metadata probe); if the adopted
    /// duration falls short of the current position, the cursor is clamped
    /// and every element is re-seeked to the clamped time, so followers
    /// still sit exactly where the cursor sits.
    pub fn promote_clock(&mut self, mut element: Box<dyn MediaElement>) -> PlayerResult<()> {
        self.ensure_open()?;

        // Adopt the duration before positioning anything: the clamped time
        // is the position everyone must agree on.
        if element.duration() > 0.0 {
            self.cursor.duration = element.duration();
            self.cursor.current_time = self.cursor.clamp(self.cursor.current_time);
        }

        element.seek(self.cursor.current_time);
        element.set_playing(self.cursor.is_playing);
        if !element.always_muted() {
            element.set_muted(self.cursor.is_muted);
        }

        debug!(
            from = self.clock.label(),
            to = element.label(),
            at = self.cursor.current_time,
            "clock of record promoted"
        );
        let demoted = std::mem::replace(&mut self.clock, element);
        self.followers.push(demoted);
        for follower in &mut self.followers {
            follower.seek(self.cursor.current_time);
        }
        self.notify();
        Ok(())
    }

    /// Authoritative time callback from the clock of record.
    ///
    /// Clamps, moves the cursor, and re-seeks every follower. The clock
    /// itself is not seeked back; it is the source of this value.
    pub fn on_time_update(&mut self, new_time: f64) -> PlayerResult<()> {
        self.ensure_open()?;
        let time = self.cursor.clamp(new_time);
        trace!(time, "time update");
        self.cursor.current_time = time;
        for follower in &mut self.followers {
            follower.seek(time);
        }
        self.notify();
        Ok(())
    }

    /// Move the cursor to `target_time`, clamped to `[0, duration]`.
    ///
    /// Re-seeks the clock of record and every follower. Does not change
    /// whether playback is running.
    pub fn seek(&mut self, target_time: f64) -> PlayerResult<()> {
        self.ensure_open()?;
        let time = self.cursor.clamp(target_time);
        trace!(requested = target_time, time, "seek");
        self.cursor.current_time = time;
        self.clock.seek(time);
        for follower in &mut self.followers {
            follower.seek(time);
        }
        self.notify();
        Ok(())
    }

    /// Seek by a signed offset from the current position.
    pub fn seek_relative(&mut self, delta_seconds: f64) -> PlayerResult<()> {
        self.seek(self.cursor.current_time + delta_seconds)
    }

    /// Seek to the start of the word at `word_index`.
    ///
    /// A click on a word that no longer exists is not an error; out-of-range
    /// indices are a silent no-op.
    pub fn seek_to_word(&mut self, word_index: usize) -> PlayerResult<()> {
        self.ensure_open()?;
        let Some(start) = self.transcript.word(word_index).map(|w| w.start) else {
            return Ok(());
        };
        self.seek(start)
    }

    /// Flip play/pause.
    ///
    /// The clock of record and every follower are commanded in this same
    /// call; followers never free-run, which is what keeps them from
    /// drifting while playing.
    pub fn toggle_playback(&mut self) -> PlayerResult<()> {
        self.ensure_open()?;
        self.cursor.is_playing = !self.cursor.is_playing;
        let playing = self.cursor.is_playing;
        self.clock.set_playing(playing);
        for follower in &mut self.followers {
            follower.set_playing(playing);
        }
        self.notify();
        Ok(())
    }

    /// Flip mute on the clock of record and every audio-bearing follower.
    ///
    /// Elements reporting [`MediaElement::always_muted`] are skipped.
    pub fn toggle_mute(&mut self) -> PlayerResult<()> {
        self.ensure_open()?;
        self.cursor.is_muted = !self.cursor.is_muted;
        let muted = self.cursor.is_muted;
        if !self.clock.always_muted() {
            self.clock.set_muted(muted);
        }
        for follower in &mut self.followers {
            if !follower.always_muted() {
                follower.set_muted(muted);
            }
        }
        self.notify();
        Ok(())
    }

    /// Replace the text of the word at `index`.
    ///
    /// Timing fields and playback state are untouched. Returns the updated
    /// transcript snapshot.
    pub fn edit_word(&mut self, index: usize, new_text: impl Into<String>) -> PlayerResult<Transcript> {
        self.ensure_open()?;
        let len = self.transcript.len();
        let word = self
            .transcript
            .word_mut(index)
            .ok_or(PlayerError::IndexOutOfRange { index, len })?;
        word.text = new_text.into();
        self.notify();
        Ok(self.transcript.clone())
    }

    /// The word being spoken at the current position, if any.
    ///
    /// First match in transcript order wins when spans overlap; `None` when
    /// the cursor sits in a gap between words.
    pub fn active_word(&self) -> PlayerResult<Option<&Word>> {
        self.ensure_open()?;
        Ok(self
            .transcript
            .word_at(self.cursor.current_time)
            .map(|(_, word)| word))
    }

    /// Read-only copy of the playback state.
    pub fn snapshot(&self) -> PlayerSnapshot {
        self.cursor.snapshot()
    }

    /// The transcript as currently edited.
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Register a change listener, called with a fresh snapshot after every
    /// state change.
    pub fn subscribe(&mut self, listener: impl Fn(PlayerSnapshot) + 'static) -> PlayerResult<()> {
        self.ensure_open()?;
        self.listeners.push(Box::new(listener));
        Ok(())
    }

    /// Release every attached element and detach all listeners.
    ///
    /// Must be called exactly once; the session is unusable afterwards and
    /// every later call (including a second teardown) fails with
    /// [`PlayerError::SessionClosed`]. Listeners are dropped before the
    /// elements are released so no callback can observe a half-disposed
    /// session.
    pub fn teardown(&mut self) -> PlayerResult<()> {
        self.ensure_open()?;
        debug!("editor session teardown");
        self.listeners.clear();
        self.clock.release();
        for follower in &mut self.followers {
            follower.release();
        }
        self.followers.clear();
        self.closed = true;
        Ok(())
    }

    fn ensure_open(&self) -> PlayerResult<()> {
        if self.closed {
            Err(PlayerError::SessionClosed)
        } else {
            Ok(())
        }
    }

    fn notify(&self) {
        let snapshot = self.cursor.snapshot();
        for listener in &self.listeners {
            listener(snapshot);
        }
    }
}

impl std::fmt::Debug for EditorSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorSession")
            .field("cursor", &self.cursor)
            .field("clock", &self.clock.label())
            .field("followers", &self.followers.len())
            .field("words", &self.transcript.len())
            .field("closed", &self.closed)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    use clipdash_models::Word;

    /// What a recording element has been told so far.
    #[derive(Debug, Default)]
    struct ElementState {
        time: f64,
        seeks: Vec<f64>,
        playing: bool,
        muted: bool,
        released: u32,
    }

    /// Test element that records every command through a shared handle.
    struct RecordingElement {
        label: &'static str,
        duration: f64,
        always_muted: bool,
        state: Rc<RefCell<ElementState>>,
    }

    impl RecordingElement {
        fn new(label: &'static str, duration: f64) -> (Box<Self>, Rc<RefCell<ElementState>>) {
            let state = Rc::new(RefCell::new(ElementState::default()));
            let element = Box::new(Self {
                label,
                duration,
                always_muted: false,
                state: Rc::clone(&state),
            });
            (element, state)
        }

        fn silent(label: &'static str) -> (Box<Self>, Rc<RefCell<ElementState>>) {
            let (mut element, state) = Self::new(label, 0.0);
            element.always_muted = true;
            (element, state)
        }
    }

    impl MediaElement for RecordingElement {
        fn label(&self) -> &str {
            self.label
        }

        fn current_time(&self) -> f64 {
            self.state.borrow().time
        }

        fn duration(&self) -> f64 {
            self.duration
        }

        fn seek(&mut self, time: f64) {
            let mut state = self.state.borrow_mut();
            state.time = time;
            state.seeks.push(time);
        }

        fn set_playing(&mut self, playing: bool) {
            self.state.borrow_mut().playing = playing;
        }

        fn set_muted(&mut self, muted: bool) {
            self.state.borrow_mut().muted = muted;
        }

        fn always_muted(&self) -> bool {
            self.always_muted
        }

        fn release(&mut self) {
            self.state.borrow_mut().released += 1;
        }
    }

    struct StubLoader {
        duration: f64,
        fail: bool,
    }

    impl MediaLoader for StubLoader {
        fn load(&self, url: &str) -> PlayerResult<Box<dyn MediaElement>> {
            if self.fail {
                return Err(PlayerError::source_load(url, "decode failed"));
            }
            let (element, _) = RecordingElement::new("fallback", self.duration);
            Ok(element)
        }
    }

    fn words_abc() -> Transcript {
        Transcript::new(vec![
            Word::new(0.0, 1.0, "a"),
            Word::new(1.0, 2.0, "b"),
            Word::new(2.0, 3.0, "c"),
        ])
    }

    fn session(duration: f64, transcript: Transcript) -> EditorSession {
        let loader = StubLoader {
            duration,
            fail: false,
        };
        EditorSession::load(&loader, "media/drafts/1.mp4", transcript).unwrap()
    }

    #[test]
    fn test_load_failure_is_source_load() {
        let loader = StubLoader {
            duration: 0.0,
            fail: true,
        };
        let err = EditorSession::load(&loader, "media/missing.mp4", words_abc()).unwrap_err();
        assert!(matches!(err, PlayerError::SourceLoad { .. }));
    }

    #[test]
    fn test_followers_never_drift_from_cursor() {
        let mut session = session(120.0, words_abc());
        let (f1, s1) = RecordingElement::new("original", 0.0);
        let (f2, s2) = RecordingElement::new("cropped", 0.0);
        session.attach_follower(f1).unwrap();
        session.attach_follower(f2).unwrap();

        // 100 interleaved clock updates and user seeks; after every call
        // both followers must sit exactly where the cursor sits.
        for i in 0..100u32 {
            let t = ((i as f64) * 37.0 + 11.0) % 150.0;
            if i % 3 == 0 {
                session.seek(t).unwrap();
            } else {
                session.on_time_update(t).unwrap();
            }
            let cursor_time = session.snapshot().current_time;
            assert_eq!(s1.borrow().time, cursor_time, "original drifted at step {i}");
            assert_eq!(s2.borrow().time, cursor_time, "cropped drifted at step {i}");
        }
    }

    #[test]
    fn test_seek_clamps_to_duration() {
        let mut session = session(42.0, words_abc());
        session.seek(-5.0).unwrap();
        assert_eq!(session.snapshot().current_time, 0.0);
        session.seek(1000.0).unwrap();
        assert_eq!(session.snapshot().current_time, 42.0);
    }

    #[test]
    fn test_seek_does_not_change_play_state() {
        let mut session = session(42.0, words_abc());
        session.toggle_playback().unwrap();
        session.seek(10.0).unwrap();
        assert!(session.snapshot().is_playing);
    }

    #[test]
    fn test_seek_relative() {
        let mut session = session(42.0, words_abc());
        session.seek(10.0).unwrap();
        session.seek_relative(5.0).unwrap();
        assert_eq!(session.snapshot().current_time, 15.0);
        session.seek_relative(-100.0).unwrap();
        assert_eq!(session.snapshot().current_time, 0.0);
    }

    #[test]
    fn test_active_word_lookup() {
        let mut session = session(10.0, words_abc());
        session.on_time_update(1.5).unwrap();
        assert_eq!(session.active_word().unwrap().unwrap().text, "b");
        session.on_time_update(5.0).unwrap();
        assert!(session.active_word().unwrap().is_none());
    }

    #[test]
    fn test_active_word_overlap_first_match() {
        let overlapping = Transcript::new(vec![
            Word::new(0.0, 2.0, "first"),
            Word::new(1.0, 3.0, "second"),
        ]);
        let mut session = session(10.0, overlapping);
        session.on_time_update(1.5).unwrap();
        assert_eq!(session.active_word().unwrap().unwrap().text, "first");
    }

    #[test]
    fn test_edit_word_touches_text_only() {
        let mut session = session(42.0, words_abc());
        session.seek(1.5).unwrap();
        session.toggle_playback().unwrap();
        let before = session.snapshot();

        let updated = session.edit_word(1, "bee").unwrap();

        assert_eq!(updated.word(1).unwrap().text, "bee");
        for (i, (start, end)) in [(0.0, 1.0), (1.0, 2.0), (2.0, 3.0)].iter().enumerate() {
            assert_eq!(updated.word(i).unwrap().start, *start);
            assert_eq!(updated.word(i).unwrap().end, *end);
        }
        assert_eq!(session.snapshot(), before);
    }

    #[test]
    fn test_edit_word_out_of_range() {
        let mut session = session(42.0, words_abc());
        let err = session.edit_word(999, "x").unwrap_err();
        assert_eq!(err, PlayerError::IndexOutOfRange { index: 999, len: 3 });
        // State untouched by the failed edit
        assert_eq!(session.transcript().word(1).unwrap().text, "b");
    }

    #[test]
    fn test_seek_to_word_and_out_of_range_noop() {
        let mut session = session(42.0, words_abc());
        session.seek_to_word(2).unwrap();
        assert_eq!(session.snapshot().current_time, 2.0);

        session.seek_to_word(999).unwrap();
        assert_eq!(session.snapshot().current_time, 2.0);
    }

    #[test]
    fn test_promotion_continuity() {
        let mut session = session(42.0, words_abc());
        session.seek(10.0).unwrap();

        let (waveform, state) = RecordingElement::new("waveform", 41.8);
        session.promote_clock(waveform).unwrap();

        // The incoming clock was positioned before it started driving;
        // its first commanded seek is the cursor position.
        let first_seek = state.borrow().seeks[0];
        assert!((first_seek - 10.0).abs() <= 0.1);
        // Decoded-audio duration wins over the probe value
        assert_eq!(session.snapshot().duration, 41.8);

        // The old clock is now a follower: clock updates re-seek it.
        session.on_time_update(12.0).unwrap();
        assert_eq!(session.snapshot().current_time, 12.0);
    }

    #[test]
    fn test_promotion_with_shorter_duration_reclamps_all_elements() {
        // The metadata probe over-reported the length; the decoded audio
        // ends before the current position. Everyone must agree on the
        // clamped time after the handover.
        let mut session = session(100.0, words_abc());
        let (follower, follower_state) = RecordingElement::new("original", 0.0);
        session.attach_follower(follower).unwrap();
        session.seek(50.0).unwrap();

        let (waveform, waveform_state) = RecordingElement::new("waveform", 41.8);
        session.promote_clock(waveform).unwrap();

        let cursor_time = session.snapshot().current_time;
        assert_eq!(cursor_time, 41.8);
        assert_eq!(waveform_state.borrow().time, cursor_time);
        assert_eq!(follower_state.borrow().time, cursor_time);
    }

    #[test]
    fn test_promoted_clock_inherits_play_and_mute_state() {
        let mut session = session(42.0, words_abc());
        session.toggle_playback().unwrap();
        session.toggle_mute().unwrap();

        let (waveform, state) = RecordingElement::new("waveform", 42.0);
        session.promote_clock(waveform).unwrap();
        assert!(state.borrow().playing);
        assert!(state.borrow().muted);
    }

    #[test]
    fn test_toggle_playback_commands_all_elements() {
        let mut session = session(42.0, words_abc());
        let (f1, s1) = RecordingElement::new("original", 0.0);
        session.attach_follower(f1).unwrap();

        session.toggle_playback().unwrap();
        assert!(session.snapshot().is_playing);
        assert!(s1.borrow().playing);

        session.toggle_playback().unwrap();
        assert!(!session.snapshot().is_playing);
        assert!(!s1.borrow().playing);
    }

    #[test]
    fn test_toggle_mute_skips_always_muted_followers() {
        let mut session = session(42.0, words_abc());
        let (silent, silent_state) = RecordingElement::silent("original");
        let (audible, audible_state) = RecordingElement::new("cropped", 0.0);
        session.attach_follower(silent).unwrap();
        session.attach_follower(audible).unwrap();

        session.toggle_mute().unwrap();
        assert!(session.snapshot().is_muted);
        assert!(audible_state.borrow().muted);
        assert!(!silent_state.borrow().muted);
    }

    #[test]
    fn test_attach_follower_syncs_immediately() {
        let mut session = session(42.0, words_abc());
        session.seek(7.0).unwrap();
        session.toggle_playback().unwrap();

        let (f, state) = RecordingElement::new("late-joiner", 0.0);
        session.attach_follower(f).unwrap();
        assert_eq!(state.borrow().time, 7.0);
        assert!(state.borrow().playing);
    }

    #[test]
    fn test_subscribers_see_every_change() {
        let mut session = session(42.0, words_abc());
        let seen: Rc<RefCell<Vec<PlayerSnapshot>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        session
            .subscribe(move |snapshot| sink.borrow_mut().push(snapshot))
            .unwrap();

        session.seek(5.0).unwrap();
        session.toggle_playback().unwrap();
        session.edit_word(0, "ay").unwrap();

        let seen = seen.borrow();
        assert_eq!(seen.len(), 3);
        assert_eq!(seen[0].current_time, 5.0);
        assert!(seen[1].is_playing);
    }

    #[test]
    fn test_teardown_releases_everything_once() {
        let mut session = session(42.0, words_abc());
        let (f, follower_state) = RecordingElement::new("original", 0.0);
        session.attach_follower(f).unwrap();

        session.teardown().unwrap();
        assert_eq!(follower_state.borrow().released, 1);
        assert_eq!(session.teardown().unwrap_err(), PlayerError::SessionClosed);
    }

    #[test]
    fn test_every_method_rejected_after_teardown() {
        let mut session = session(42.0, words_abc());
        session.teardown().unwrap();

        let closed = PlayerError::SessionClosed;
        assert_eq!(session.on_time_update(1.0).unwrap_err(), closed);
        assert_eq!(session.seek(1.0).unwrap_err(), closed);
        assert_eq!(session.seek_relative(1.0).unwrap_err(), closed);
        assert_eq!(session.seek_to_word(0).unwrap_err(), closed);
        assert_eq!(session.toggle_playback().unwrap_err(), closed);
        assert_eq!(session.toggle_mute().unwrap_err(), closed);
        assert_eq!(session.edit_word(0, "x").unwrap_err(), closed);
        assert_eq!(session.active_word().unwrap_err(), closed);
        assert_eq!(session.subscribe(|_| {}).unwrap_err(), closed);
        let (f, _) = RecordingElement::new("late", 0.0);
        assert_eq!(session.attach_follower(f).unwrap_err(), closed);
        let (c, _) = RecordingElement::new("late-clock", 0.0);
        assert_eq!(session.promote_clock(c).unwrap_err(), closed);
    }

    #[test]
    fn test_time_update_clamps_like_seek() {
        let mut session = session(42.0, words_abc());
        session.on_time_update(-3.0).unwrap();
        assert_eq!(session.snapshot().current_time, 0.0);
        session.on_time_update(500.0).unwrap();
        assert_eq!(session.snapshot().current_time, 42.0);
    }
}
