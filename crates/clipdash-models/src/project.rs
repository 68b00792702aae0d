//! Projects: one submitted source video and its pipeline state.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Status of a project's download/transcribe/analyze pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    /// Pipeline is downloading, transcribing, or analyzing
    #[default]
    Processing,
    /// Candidates are ready for review
    Completed,
    /// Pipeline failed
    Failed,
}

impl ProjectStatus {
    /// Returns the status as a string for display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Processing => "processing",
            Self::Completed => "completed",
            Self::Failed => "failed",
        }
    }

    /// Returns true if the status is terminal (completed or failed).
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }

    /// Returns true if the pipeline is still running.
    pub fn is_in_progress(&self) -> bool {
        matches!(self, Self::Processing)
    }
}

/// A source video submitted for clipping.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Project {
    /// Unique identifier
    pub id: String,

    /// The submitted YouTube URL
    pub youtube_url: String,

    /// Current pipeline status
    pub status: ProjectStatus,

    /// Video title, once the downloader has fetched metadata
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Thumbnail URL, once known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,

    /// When the project was created
    pub created_at: DateTime<Utc>,
}
