//! Caller-owned polling for backend jobs.
//!
//! The editor cannot open until a preparation job has produced the cropped
//! draft and the transcript, and the review page keeps refreshing while
//! renders are outstanding. Both are observed by polling; the playback core
//! never polls on its own behalf. Cancellation is by dropping or aborting
//! the task that runs the watcher.

use std::time::Duration;

use tokio::time::{sleep, Instant};
use tracing::debug;

use clipdash_models::ClipCandidate;

use crate::client::ApiClient;
use crate::error::WatchError;

/// Polling cadence and deadline.
#[derive(Debug, Clone)]
pub struct PollConfig {
    /// Delay between polls
    pub interval: Duration,
    /// Give up after this long; `None` polls until cancelled
    pub timeout: Option<Duration>,
}

impl PollConfig {
    /// Editor preparation: every 3s, give up after 5 minutes.
    pub fn editor_preparation() -> Self {
        Self {
            interval: Duration::from_secs(3),
            timeout: Some(Duration::from_secs(300)),
        }
    }

    /// Render progress on the review page: every 5s, no deadline.
    pub fn render_progress() -> Self {
        Self {
            interval: Duration::from_secs(5),
            timeout: None,
        }
    }
}

/// Poll a candidate until its editor inputs (draft video + transcript) are
/// ready, returning the prepared candidate.
pub async fn wait_for_editor_ready(
    client: &ApiClient,
    candidate_id: u64,
    config: &PollConfig,
) -> Result<ClipCandidate, WatchError> {
    let started = Instant::now();
    let deadline = config.timeout.map(|t| started + t);
    loop {
        let candidate = client.get_candidate(candidate_id).await?;
        if candidate.is_ready_for_editing() {
            debug!(candidate_id, "editor inputs ready");
            return Ok(candidate);
        }
        sleep_or_give_up(config, started, deadline).await?;
    }
}

/// Poll a project's candidates until every one has rendered, returning the
/// final list.
pub async fn wait_for_renders(
    client: &ApiClient,
    project_id: &str,
    config: &PollConfig,
) -> Result<Vec<ClipCandidate>, WatchError> {
    let started = Instant::now();
    let deadline = config.timeout.map(|t| started + t);
    loop {
        let candidates = client.candidates(project_id).await?;
        if candidates.iter().all(|c| c.is_rendered) {
            debug!(project_id, count = candidates.len(), "all renders complete");
            return Ok(candidates);
        }
        sleep_or_give_up(config, started, deadline).await?;
    }
}

async fn sleep_or_give_up(
    config: &PollConfig,
    started: Instant,
    deadline: Option<Instant>,
) -> Result<(), WatchError> {
    if let Some(deadline) = deadline {
        if Instant::now() + config.interval >= deadline {
            return Err(WatchError::Timeout(started.elapsed()));
        }
    }
    sleep(config.interval).await;
    Ok(())
}
