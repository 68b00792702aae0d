//! Review/edit state shared across the dashboard pages.

use tracing::debug;

use clipdash_models::{ClipCandidate, Project, Transcript};

type ChangeListener = Box<dyn Fn()>;

/// Projects, candidates, and the in-progress subtitle edit.
///
/// Subscribers get a change ping after every mutation and re-read whatever
/// they render through the accessors.
#[derive(Default)]
pub struct VideoStore {
    projects: Vec<Project>,
    current_project: Option<Project>,
    candidates: Vec<ClipCandidate>,
    current_candidate: Option<ClipCandidate>,
    /// Working copy of the current candidate's transcript; what the user
    /// has typed but not yet rendered.
    edited_transcript: Option<Transcript>,
    listeners: Vec<ChangeListener>,
}

impl VideoStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn current_project(&self) -> Option<&Project> {
        self.current_project.as_ref()
    }

    pub fn candidates(&self) -> &[ClipCandidate] {
        &self.candidates
    }

    pub fn current_candidate(&self) -> Option<&ClipCandidate> {
        self.current_candidate.as_ref()
    }

    pub fn edited_transcript(&self) -> Option<&Transcript> {
        self.edited_transcript.as_ref()
    }

    pub fn set_projects(&mut self, projects: Vec<Project>) {
        self.projects = projects;
        self.notify();
    }

    pub fn set_current_project(&mut self, project: Option<Project>) {
        self.current_project = project;
        self.notify();
    }

    pub fn set_candidates(&mut self, candidates: Vec<ClipCandidate>) {
        self.candidates = candidates;
        self.notify();
    }

    /// Select a candidate for editing. The working transcript is seeded
    /// from the candidate's prepared transcript, when it has one.
    pub fn set_current_candidate(&mut self, candidate: Option<ClipCandidate>) {
        self.edited_transcript = candidate
            .as_ref()
            .and_then(|c| c.transcript_data.clone());
        self.current_candidate = candidate;
        self.notify();
    }

    /// Replace the text of one word in the working transcript.
    ///
    /// Returns false (and changes nothing) when there is no working
    /// transcript or the index is out of range; a stale edit from the view
    /// is not an error here.
    pub fn update_word(&mut self, index: usize, text: impl Into<String>) -> bool {
        let Some(transcript) = self.edited_transcript.as_mut() else {
            return false;
        };
        let Some(word) = transcript.word_mut(index) else {
            return false;
        };
        word.text = text.into();
        self.notify();
        true
    }

    /// Clear everything, e.g. when leaving the dashboard.
    pub fn reset(&mut self) {
        debug!("video store reset");
        self.projects.clear();
        self.current_project = None;
        self.candidates.clear();
        self.current_candidate = None;
        self.edited_transcript = None;
        self.notify();
    }

    /// Register a change listener.
    pub fn subscribe(&mut self, listener: impl Fn() + 'static) {
        self.listeners.push(Box::new(listener));
    }

    fn notify(&self) {
        for listener in &self.listeners {
            listener();
        }
    }
}
