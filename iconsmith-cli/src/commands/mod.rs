//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod auth;
mod generate;
mod health;
mod icons;

pub use auth::AuthCommands;
pub use generate::GenerateCommands;
pub use icons::IconCommands;

use anyhow::Result;
use clap::Subcommand;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Check that the API is reachable
    Health,
    /// Browse generated icons
    Icons {
        #[command(subcommand)]
        command: IconCommands,
    },
    /// Generate icons from a concept or a YouTube video
    Generate {
        #[command(subcommand)]
        command: GenerateCommands,
    },
    /// Show the status of a generation task
    Status {
        /// Task ID returned when the generation was submitted
        task_id: String,

        /// Keep polling until the task completes or fails
        #[arg(short, long)]
        watch: bool,

        /// Delay between status checks when watching, in milliseconds
        #[arg(long, default_value_t = 2000)]
        interval_ms: u64,
    },
    /// Manage the stored API token
    Auth {
        #[command(subcommand)]
        command: AuthCommands,
    },
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
///
/// # Arguments
/// * `command` - The command to execute
/// * `config` - The CLI configuration
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Health => health::handle_health_command(config).await,
        Commands::Icons { command } => icons::handle_icon_command(command, config).await,
        Commands::Generate { command } => {
            generate::handle_generate_command(command, config).await
        }
        Commands::Status {
            task_id,
            watch,
            interval_ms,
        } => generate::handle_status_command(&task_id, watch, interval_ms, config).await,
        Commands::Auth { command } => auth::handle_auth_command(command, config),
    }
}
