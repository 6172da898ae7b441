//! Generation status poller
//!
//! Watches a generation task until it reaches a terminal status. The loop is
//! strictly sequential: fetch, report the snapshot, check the status, sleep,
//! repeat. The sleep starts only after the previous fetch and its callback
//! have finished, so slow fetches push the schedule back instead of
//! overlapping.
//!
//! Any fetch error ends the loop at once; nothing is retried. There is no
//! cancellation handle: dropping the returned future is the only way to stop
//! a loop early.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use iconsmith_core::domain::generation::{GenerationStatus, GenerationTask};
use thiserror::Error;
use tracing::debug;

use crate::IconsClient;
use crate::error::{ClientError, Result};

/// Delay between the end of one fetch and the start of the next
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(2000);

/// Reported when a task fails without saying why
pub const DEFAULT_FAILURE_MESSAGE: &str = "Generation failed";

/// Anything that can report the status of a generation task
#[async_trait]
pub trait StatusSource: Send + Sync {
    async fn fetch_status(&self, task_id: &str) -> Result<GenerationTask>;
}

#[async_trait]
impl StatusSource for IconsClient {
    async fn fetch_status(&self, task_id: &str) -> Result<GenerationTask> {
        self.get_generation_status(task_id).await
    }
}

#[async_trait]
impl<'a, T: StatusSource + ?Sized> StatusSource for &'a T {
    async fn fetch_status(&self, task_id: &str) -> Result<GenerationTask> {
        (**self).fetch_status(task_id).await
    }
}

#[async_trait]
impl<T: StatusSource + ?Sized> StatusSource for Arc<T> {
    async fn fetch_status(&self, task_id: &str) -> Result<GenerationTask> {
        (**self).fetch_status(task_id).await
    }
}

/// Why a poll loop ended without a completed task
#[derive(Debug, Error)]
pub enum PollError {
    /// A status fetch failed
    #[error(transparent)]
    Transport(#[from] ClientError),

    /// The backend reported the task as failed
    #[error("{message}")]
    Failed {
        /// The task's `error`, or [`DEFAULT_FAILURE_MESSAGE`]
        message: String,
        /// The terminal snapshot, with whatever partial results it carries
        task: Box<GenerationTask>,
    },
}

impl PollError {
    /// Human-readable reason
    pub fn message(&self) -> String {
        match self {
            PollError::Transport(e) => e.message(),
            PollError::Failed { message, .. } => message.clone(),
        }
    }

    /// The failed task's final snapshot, if the backend reported one
    pub fn task(&self) -> Option<&GenerationTask> {
        match self {
            PollError::Transport(_) => None,
            PollError::Failed { task, .. } => Some(task.as_ref()),
        }
    }
}

/// Polls a [`StatusSource`] until a task completes or fails
///
/// Each call to [`StatusPoller::poll`] runs its own independent loop; two
/// loops over the same task ID do not share fetches.
#[derive(Debug, Clone)]
pub struct StatusPoller<S> {
    source: S,
    interval: Duration,
}

impl<S: StatusSource> StatusPoller<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            interval: DEFAULT_POLL_INTERVAL,
        }
    }

    /// Set the delay between fetches
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Poll without observing intermediate snapshots
    pub async fn poll(&self, task_id: &str) -> std::result::Result<GenerationTask, PollError> {
        self.poll_with_progress(task_id, |_| {}).await
    }

    /// Poll, handing every fetched snapshot to `on_progress`
    ///
    /// The callback runs before the termination check, so it also sees the
    /// terminal snapshot. Resolves with the `completed` snapshot; a `failed`
    /// snapshot becomes [`PollError::Failed`] and a fetch error becomes
    /// [`PollError::Transport`]. Only `status` decides whether to continue.
    pub async fn poll_with_progress<F>(
        &self,
        task_id: &str,
        mut on_progress: F,
    ) -> std::result::Result<GenerationTask, PollError>
    where
        F: FnMut(&GenerationTask) + Send,
    {
        let mut fetches: u64 = 0;

        loop {
            fetches += 1;
            let task = self.source.fetch_status(task_id).await.map_err(|e| {
                debug!("Status fetch #{} for task {} failed: {}", fetches, task_id, e);
                PollError::Transport(e)
            })?;

            debug!(
                "Task {} is {} ({}%) after {} fetch(es)",
                task_id, task.status, task.progress, fetches
            );

            on_progress(&task);

            match task.status {
                GenerationStatus::Completed => return Ok(task),
                GenerationStatus::Failed => {
                    let message = task
                        .error
                        .clone()
                        .unwrap_or_else(|| DEFAULT_FAILURE_MESSAGE.to_string());
                    return Err(PollError::Failed {
                        message,
                        task: Box::new(task),
                    });
                }
                _ => tokio::time::sleep(self.interval).await,
            }
        }
    }
}
