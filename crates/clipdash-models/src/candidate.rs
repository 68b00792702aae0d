//! Clip candidates proposed by the analysis pipeline.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::transcript::Transcript;

/// A backend-proposed clip segment awaiting user review, render, and publish.
///
/// The editor can only open a candidate once the preparation job has produced
/// both the cropped draft video and the word-level transcript; see
/// [`ClipCandidate::is_ready_for_editing`].
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ClipCandidate {
    /// Candidate identifier
    pub id: u64,

    /// Parent project
    pub project_id: String,

    /// Segment start within the source video (seconds)
    pub start_time: f64,

    /// Segment end within the source video (seconds)
    pub end_time: f64,

    /// Suggested clip title
    pub title: String,

    /// Why the analyzer picked this segment
    #[serde(default)]
    pub description: String,

    /// Analyzer score (0.0-10.0, higher is more promising)
    pub viral_score: f64,

    /// Whether the final render has completed
    pub is_rendered: bool,

    /// Path to the cropped draft video, once prepared
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draft_video_path: Option<String>,

    /// Word-level transcript for the segment, once prepared
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transcript_data: Option<Transcript>,
}

impl ClipCandidate {
    /// Returns true once both editor inputs (draft video and transcript)
    /// exist, i.e. the preparation job has finished.
    pub fn is_ready_for_editing(&self) -> bool {
        self.draft_video_path.is_some() && self.transcript_data.is_some()
    }

    /// Segment length in seconds.
    pub fn duration_secs(&self) -> f64 {
        (self.end_time - self.start_time).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::word::Word;

    fn candidate() -> ClipCandidate {
        ClipCandidate {
            id: 1,
            project_id: "proj-1".to_string(),
            start_time: 30.0,
            end_time: 75.0,
            title: "Hook moment".to_string(),
            description: String::new(),
            viral_score: 8.4,
            is_rendered: false,
            draft_video_path: None,
            transcript_data: None,
        }
    }

    #[test]
    fn test_readiness_requires_both_inputs() {
        let mut c = candidate();
        assert!(!c.is_ready_for_editing());

        c.draft_video_path = Some("media/drafts/1.mp4".to_string());
        assert!(!c.is_ready_for_editing());

        c.transcript_data = Some(Transcript::new(vec![Word::new(0.0, 0.4, "so")]));
        assert!(c.is_ready_for_editing());
    }

    #[test]
    fn test_duration() {
        assert!((candidate().duration_secs() - 45.0).abs() < f64::EPSILON);
    }
}
