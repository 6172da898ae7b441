//! Iconsmith CLI
//!
//! Command-line interface for the Iconsmith icon generation API: submit
//! concepts or YouTube videos, follow their progress, and browse the gallery.

mod commands;
mod config;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "iconsmith")]
#[command(about = "Iconsmith icon generation CLI", long_about = None)]
struct Cli {
    /// API base URL
    #[arg(long, env = "ICONSMITH_API_URL", default_value = "http://localhost:8000")]
    api_url: String,

    /// Overall timeout for each request, in seconds
    #[arg(long, env = "ICONSMITH_TIMEOUT_SECS", default_value_t = 30)]
    timeout_secs: u64,

    /// File holding the API token [default: ~/.iconsmith/credentials.json]
    #[arg(long, env = "ICONSMITH_TOKEN_FILE")]
    token_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so they never interleave with command output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "iconsmith_cli=warn,iconsmith_client=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = Config {
        api_url: cli.api_url,
        timeout: Duration::from_secs(cli.timeout_secs),
        token_file: cli.token_file.unwrap_or_else(config::default_token_file),
    };
    config.validate()?;

    handle_command(cli.command, &config).await
}
