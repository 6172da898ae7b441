//! Health command handler

use anyhow::{Context, Result};
use colored::*;

use crate::config::Config;

/// Probe the API and print what it reports about itself
pub async fn handle_health_command(config: &Config) -> Result<()> {
    let client = config.client()?;

    let health = client
        .health_check()
        .await
        .with_context(|| format!("API at {} is not reachable", client.base_url()))?;

    println!("{} {} is {}", "✓".green(), client.base_url(), health.status.green());
    if let Some(version) = &health.version {
        println!("  Version:     {}", version);
    }
    if let Some(environment) = &health.environment {
        println!("  Environment: {}", environment);
    }
    if let Some(timestamp) = health.timestamp {
        println!(
            "  Server time: {}",
            timestamp.format("%Y-%m-%d %H:%M:%S").to_string().dimmed()
        );
    }

    Ok(())
}
