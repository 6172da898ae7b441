//! Generation command handlers
//!
//! Submits concept and YouTube generations, then follows the task until it
//! completes or fails. Input is validated before anything is sent. A failed
//! task still shows whatever partial results it produced.

use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use colored::*;
use iconsmith_client::{IconsClient, PollError};
use iconsmith_core::domain::generation::{ConceptPriority, GenerationStatus, GenerationTask};
use iconsmith_core::domain::icon::IconCategory;
use iconsmith_core::dto::generate::{
    GenerateConceptRequest, GenerateResponse, GenerateYouTubeRequest,
};
use iconsmith_core::validation::{validate_concept, validate_youtube_url};
use tracing::debug;

use crate::config::Config;

/// Transcript lines shown before eliding the rest
const TRANSCRIPT_PREVIEW_LINES: usize = 5;

/// Generate subcommands
#[derive(Subcommand)]
pub enum GenerateCommands {
    /// Generate one icon from a text concept
    Concept {
        /// What the icon should depict (e.g. "Bitcoin")
        concept: String,

        /// Category override
        #[arg(short, long)]
        category: Option<IconCategory>,

        /// Visual style
        #[arg(long)]
        style: Option<String>,

        /// Image dimensions (e.g. 2048x2048)
        #[arg(long)]
        size: Option<String>,

        /// Skip generating a video animation prompt
        #[arg(long)]
        no_animation_prompt: bool,

        #[command(flatten)]
        wait: WaitArgs,
    },
    /// Extract concepts from a YouTube video and generate their icons
    Youtube {
        /// Video URL (watch, youtu.be, embed or shorts form)
        url: String,

        /// Maximum number of concepts to extract
        #[arg(long)]
        max_concepts: Option<u32>,

        /// Lowest concept priority to keep: high, medium or low
        #[arg(long)]
        min_priority: Option<ConceptPriority>,

        /// Visual style
        #[arg(long)]
        style: Option<String>,

        /// Stop after extracting concepts
        #[arg(long)]
        no_auto_generate: bool,

        #[command(flatten)]
        wait: WaitArgs,
    },
}

/// How to follow a submitted task
#[derive(Debug, Args)]
pub struct WaitArgs {
    /// Delay between status checks, in milliseconds
    #[arg(long, default_value_t = 2000)]
    pub interval_ms: u64,

    /// Print the task ID and return without waiting
    #[arg(long)]
    pub no_wait: bool,
}

impl WaitArgs {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

/// Handle generate commands
///
/// # Arguments
/// * `command` - The generate command to execute
/// * `config` - The CLI configuration
pub async fn handle_generate_command(command: GenerateCommands, config: &Config) -> Result<()> {
    match command {
        GenerateCommands::Concept {
            concept,
            category,
            style,
            size,
            no_animation_prompt,
            wait,
        } => {
            let concept = validate_concept(&concept)?;
            let req = GenerateConceptRequest {
                concept,
                category: category.map(|c| c.as_str().to_string()),
                style,
                size,
                include_animation_prompt: no_animation_prompt.then_some(false),
            };

            let client = config.client()?;
            let created = client
                .generate_from_concept(req)
                .await
                .context("Failed to submit concept generation")?;
            follow(&client, &created, &wait).await
        }
        GenerateCommands::Youtube {
            url,
            max_concepts,
            min_priority,
            style,
            no_auto_generate,
            wait,
        } => {
            let youtube_url = validate_youtube_url(&url)?;
            let req = GenerateYouTubeRequest {
                youtube_url,
                max_concepts,
                min_priority,
                style,
                auto_generate: no_auto_generate.then_some(false),
            };

            let client = config.client()?;
            let created = client
                .generate_from_youtube(req)
                .await
                .context("Failed to submit YouTube generation")?;
            follow(&client, &created, &wait).await
        }
    }
}

/// Handle the top-level status command
pub async fn handle_status_command(
    task_id: &str,
    watch: bool,
    interval_ms: u64,
    config: &Config,
) -> Result<()> {
    let client = config.client()?;

    if watch {
        return watch_task(&client, task_id, Duration::from_millis(interval_ms)).await;
    }

    let task = client
        .get_generation_status(task_id)
        .await
        .with_context(|| format!("Failed to get status of task {}", task_id))?;

    print_task_details(&task);

    Ok(())
}

/// Report a freshly created task and wait for it unless told not to
async fn follow(client: &IconsClient, created: &GenerateResponse, wait: &WaitArgs) -> Result<()> {
    println!("{} {}", "✓".green(), created.message);
    println!("  Task:     {}", created.task_id.cyan());
    println!("  Status:   {}", colorize_status(created.status));
    if let Some(seconds) = created.estimated_time_seconds {
        println!("  Estimate: ~{}s", seconds);
    }
    println!();

    debug!("Submitted task {} ({})", created.task_id, created.status);

    if wait.no_wait {
        println!(
            "{}",
            format!("Follow it with: iconsmith status {} --watch", created.task_id).dimmed()
        );
        return Ok(());
    }

    watch_task(client, &created.task_id, wait.interval()).await
}

/// Poll a task to its end, printing one line per snapshot
async fn watch_task(client: &IconsClient, task_id: &str, interval: Duration) -> Result<()> {
    let mut last: Option<GenerationTask> = None;

    let result = client
        .poll_generation_status(
            task_id,
            |task| {
                print_progress_line(task);
                last = Some(task.clone());
            },
            interval,
        )
        .await;

    println!();
    match result {
        Ok(task) => {
            println!("{} Task {} completed", "✓".green(), task.task_id.cyan());
            print_task_results(&task);
            Ok(())
        }
        Err(e) => {
            println!("{} {}", "✗".red(), e.message().red());
            if let Some(task) = snapshot_to_show(&e, last.as_ref()) {
                print_task_results(task);
            }
            Err(anyhow::Error::new(e).context(format!("Task {} did not complete", task_id)))
        }
    }
}

/// Pick the snapshot whose partial results accompany a failed poll
///
/// A backend-reported failure carries its own terminal snapshot. A transport
/// error has none, so the last snapshot seen before it is used.
fn snapshot_to_show<'a>(
    error: &'a PollError,
    last: Option<&'a GenerationTask>,
) -> Option<&'a GenerationTask> {
    error.task().or(last)
}

/// Print a one-line progress view of a snapshot
fn print_progress_line(task: &GenerationTask) {
    let progress = task.progress.min(100);
    let filled = usize::from(progress) / 5;
    let bar = format!("{}{}", "█".repeat(filled), "░".repeat(20 - filled));

    let message = task.message.as_deref().unwrap_or_default();
    println!(
        "  [{}] {:>3}% {} {}",
        bar.cyan(),
        progress,
        colorize_status(task.status),
        message.dimmed()
    );
}

/// Print detailed information about a snapshot
fn print_task_details(task: &GenerationTask) {
    println!("{}", "Task Details:".bold());
    println!("  ID:        {}", task.task_id.cyan());
    println!("  Status:    {}", colorize_status(task.status));
    println!("  Progress:  {}%", task.progress);

    if let Some(message) = &task.message {
        println!("  Message:   {}", message);
    }
    if let Some(created) = task.created_at {
        println!("  Created:   {}", created.format("%Y-%m-%d %H:%M:%S"));
    }
    if let Some(updated) = task.updated_at {
        println!("  Updated:   {}", updated.format("%Y-%m-%d %H:%M:%S"));
    }
    if let Some(completed) = task.completed_at {
        println!("  Completed: {}", completed.format("%Y-%m-%d %H:%M:%S"));

        if let Some(created) = task.created_at {
            let seconds = completed.signed_duration_since(created).num_seconds();
            println!("  Duration:  {}s", seconds);
        }
    }

    if let Some(error) = &task.error {
        println!("\n{}", "Error:".bold());
        println!("{}", error.red());
    }

    print_task_results(task);

    if !task.metadata.is_empty() {
        println!("\n{}", "Metadata:".bold());
        match serde_json::to_string_pretty(&task.metadata) {
            Ok(json) => println!("{}", json),
            Err(e) => debug!("Failed to render metadata: {}", e),
        }
    }
}

/// Print the results a snapshot carries, complete or partial
fn print_task_results(task: &GenerationTask) {
    if !task.has_results() {
        return;
    }

    if let Some(segments) = task.transcript.as_ref().filter(|s| !s.is_empty()) {
        println!("\n{}", format!("Transcript ({} segments):", segments.len()).bold());
        for segment in segments.iter().take(TRANSCRIPT_PREVIEW_LINES) {
            println!(
                "  {} {}",
                format!("[{:>6.1}s]", segment.start).dimmed(),
                segment.text
            );
        }
        if segments.len() > TRANSCRIPT_PREVIEW_LINES {
            println!(
                "  {}",
                format!("… {} more", segments.len() - TRANSCRIPT_PREVIEW_LINES).dimmed()
            );
        }
    } else if let Some(text) = task.transcript_text.as_ref().filter(|t| !t.is_empty()) {
        println!("\n{}", "Transcript:".bold());
        println!("{}", text);
    }

    if let Some(concepts) = task.extracted_concepts.as_ref().filter(|c| !c.is_empty()) {
        println!("\n{}", format!("Extracted concepts ({}):", concepts.len()).bold());
        for concept in concepts {
            let priority = match concept.priority {
                ConceptPriority::High => concept.priority.as_str().red(),
                ConceptPriority::Medium => concept.priority.as_str().yellow(),
                ConceptPriority::Low => concept.priority.as_str().dimmed(),
            };
            println!(
                "  {} {} [{}] {}",
                "▸".cyan(),
                concept.name.bold(),
                priority,
                concept.category.dimmed()
            );
            println!("    {}", concept.visual_description);
        }
    }

    if let Some(icons) = task.generated_icons.as_ref().filter(|i| !i.is_empty()) {
        println!("\n{}", format!("Generated icons ({}):", icons.len()).bold());
        for id in icons {
            println!("  {} {}", "▸".cyan(), id);
        }
        println!(
            "{}",
            "  View one with: iconsmith icons get <id>".dimmed()
        );
    }
}

/// Colorize generation status for display
fn colorize_status(status: GenerationStatus) -> ColoredString {
    let status_str = status.as_str();
    match status {
        GenerationStatus::Pending => status_str.yellow(),
        GenerationStatus::Completed => status_str.green(),
        GenerationStatus::Failed => status_str.red(),
        GenerationStatus::Processing
        | GenerationStatus::ExtractingConcepts
        | GenerationStatus::GeneratingImages
        | GenerationStatus::RemovingBackgrounds
        | GenerationStatus::Uploading => status_str.cyan(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iconsmith_client::ClientError;

    fn extracting() -> GenerationTask {
        let mut task = GenerationTask::new("t1", GenerationStatus::ExtractingConcepts, 30);
        task.transcript_text = Some("bitcoin hits a new high".to_string());
        task
    }

    #[test]
    fn test_transport_error_shows_last_snapshot() {
        let error = PollError::from(ClientError::api_error(500, "Request failed with status code 500"));
        let last = extracting();

        let shown = snapshot_to_show(&error, Some(&last)).unwrap();
        assert_eq!(shown.status, GenerationStatus::ExtractingConcepts);
        assert_eq!(shown.transcript_text.as_deref(), Some("bitcoin hits a new high"));
    }

    #[test]
    fn test_transport_error_before_any_snapshot_shows_nothing() {
        let error = PollError::from(ClientError::api_error(502, "Request failed with status code 502"));
        assert!(snapshot_to_show(&error, None).is_none());
    }

    #[test]
    fn test_backend_failure_prefers_its_own_snapshot() {
        let mut failed = GenerationTask::new("t1", GenerationStatus::Failed, 40);
        failed.generated_icons = Some(vec!["i1".to_string()]);
        let error = PollError::Failed {
            message: "Upload failed".to_string(),
            task: Box::new(failed),
        };
        let last = extracting();

        let shown = snapshot_to_show(&error, Some(&last)).unwrap();
        assert_eq!(shown.status, GenerationStatus::Failed);
        assert_eq!(shown.generated_icons, Some(vec!["i1".to_string()]));
    }

    #[test]
    fn test_wait_interval() {
        let wait = WaitArgs {
            interval_ms: 750,
            no_wait: false,
        };
        assert_eq!(wait.interval(), Duration::from_millis(750));
    }
}
