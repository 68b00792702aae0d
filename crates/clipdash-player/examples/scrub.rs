//! Drives an editor session over scripted media elements and prints the
//! subtitle line as the clock advances.
//!
//! Run with: `cargo run -p clipdash-player --example scrub`

use std::cell::Cell;
use std::rc::Rc;

use clipdash_models::{format_clock, Transcript, Word};
use clipdash_player::{EditorSession, MediaElement, MediaLoader, PlayerResult};

/// Minimal stand-in for a real playback surface.
struct ScriptedElement {
    label: &'static str,
    duration: f64,
    time: Rc<Cell<f64>>,
    playing: bool,
    muted: bool,
}

impl ScriptedElement {
    fn new(label: &'static str, duration: f64) -> Self {
        Self {
            label,
            duration,
            time: Rc::new(Cell::new(0.0)),
            playing: false,
            muted: false,
        }
    }
}

impl MediaElement for ScriptedElement {
    fn label(&self) -> &str {
        self.label
    }

    fn current_time(&self) -> f64 {
        self.time.get()
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    fn seek(&mut self, time: f64) {
        self.time.set(time);
    }

    fn set_playing(&mut self, playing: bool) {
        self.playing = playing;
    }

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }
}

struct ScriptedLoader;

impl MediaLoader for ScriptedLoader {
    fn load(&self, _url: &str) -> PlayerResult<Box<dyn MediaElement>> {
        Ok(Box::new(ScriptedElement::new("fallback", 6.0)))
    }
}

fn print_subtitle(session: &EditorSession) -> PlayerResult<()> {
    let snapshot = session.snapshot();
    let line = match session.active_word()? {
        Some(word) => word.text.clone(),
        None => "·".to_string(),
    };
    println!(
        "{} / {}  {}",
        format_clock(snapshot.current_time),
        format_clock(snapshot.duration),
        line
    );
    Ok(())
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "debug".into()),
        )
        .init();

    let transcript = Transcript::new(vec![
        Word::new(0.2, 0.6, "never"),
        Word::new(0.6, 1.1, "gonna"),
        Word::new(1.1, 1.6, "give"),
        Word::new(1.6, 2.0, "you"),
        Word::new(2.0, 2.8, "up"),
        Word::new(3.2, 3.7, "never"),
        Word::new(3.7, 4.2, "gonna"),
        Word::new(4.2, 4.7, "let"),
        Word::new(4.7, 5.1, "you"),
        Word::new(5.1, 5.9, "down"),
    ]);

    let mut session = EditorSession::load(&ScriptedLoader, "media/drafts/1.mp4", transcript)?;
    session.attach_follower(Box::new(ScriptedElement::new("original", 0.0)))?;
    session.attach_follower(Box::new(ScriptedElement::new("cropped-preview", 0.0)))?;
    session.toggle_playback()?;

    // Fallback element carries the clock for the first second
    for step in 1..=4 {
        session.on_time_update(step as f64 * 0.25)?;
        print_subtitle(&session)?;
    }

    // Waveform decode finishes: promote it without a visible jump
    session.promote_clock(Box::new(ScriptedElement::new("waveform", 6.0)))?;
    for step in 5..=12 {
        session.on_time_update(step as f64 * 0.25)?;
        print_subtitle(&session)?;
    }

    // A transcript fix and a word click
    session.edit_word(4, "up!")?;
    session.seek_to_word(4)?;
    print_subtitle(&session)?;

    session.teardown()?;
    Ok(())
}
