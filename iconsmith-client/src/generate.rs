//! Generation endpoints

use std::time::Duration;

use crate::IconsClient;
use crate::error::Result;
use crate::poller::{PollError, StatusPoller};
use iconsmith_core::domain::generation::GenerationTask;
use iconsmith_core::dto::generate::{
    GenerateConceptRequest, GenerateResponse, GenerateYouTubeRequest,
};
use reqwest::Method;

impl IconsClient {
    // =============================================================================
    // Job Creation
    // =============================================================================

    /// Start generating an icon from a text concept
    ///
    /// The request is sent as-is; validate user input beforehand with
    /// [`iconsmith_core::validation::validate_concept`].
    ///
    /// # Returns
    /// The created task ID, its initial status and an optional time estimate
    pub async fn generate_from_concept(
        &self,
        req: GenerateConceptRequest,
    ) -> Result<GenerateResponse> {
        let response = self
            .request(Method::POST, &["api", "generate", "concept"])?
            .json(&req)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Start extracting concepts from a YouTube video and generating their icons
    ///
    /// The URL is not checked here; see
    /// [`iconsmith_core::validation::validate_youtube_url`].
    pub async fn generate_from_youtube(
        &self,
        req: GenerateYouTubeRequest,
    ) -> Result<GenerateResponse> {
        let response = self
            .request(Method::POST, &["api", "generate", "youtube"])?
            .json(&req)
            .send()
            .await?;

        self.handle_response(response).await
    }

    // =============================================================================
    // Job Status
    // =============================================================================

    /// Fetch the current status snapshot of a generation task
    pub async fn get_generation_status(&self, task_id: &str) -> Result<GenerationTask> {
        let response = self
            .request(Method::GET, &["api", "generate", "status", task_id])?
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Poll a generation task until it completes or fails
    ///
    /// `on_progress` sees every fetched snapshot, the terminal one included.
    /// See [`StatusPoller`] for the exact loop semantics.
    ///
    /// # Example
    /// ```no_run
    /// # use iconsmith_client::{IconsClient, DEFAULT_POLL_INTERVAL};
    /// # async fn example() -> anyhow::Result<()> {
    /// let client = IconsClient::new("http://localhost:8000")?;
    /// let task = client
    ///     .poll_generation_status("gen_abc123", |t| println!("{}%", t.progress), DEFAULT_POLL_INTERVAL)
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn poll_generation_status<F>(
        &self,
        task_id: &str,
        on_progress: F,
        interval: Duration,
    ) -> std::result::Result<GenerationTask, PollError>
    where
        F: FnMut(&GenerationTask) + Send,
    {
        StatusPoller::new(self)
            .with_interval(interval)
            .poll_with_progress(task_id, on_progress)
            .await
    }
}
