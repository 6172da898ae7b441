//! Icon command handlers
//!
//! Handles the gallery: listing, viewing details, and downloading images.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::*;
use iconsmith_client::IconsClient;
use iconsmith_core::domain::icon::{Icon, IconCategory, IconSize};
use iconsmith_core::dto::icon::ListIconsParams;

use crate::config::Config;

/// Icon subcommands
#[derive(Subcommand)]
pub enum IconCommands {
    /// List generated icons
    List {
        /// Search icon names and tags
        #[arg(short, long)]
        search: Option<String>,

        /// Only show one category (e.g. devises, immobilier)
        #[arg(short, long)]
        category: Option<IconCategory>,

        /// Page number, starting at 1
        #[arg(long, default_value_t = 1)]
        page: u32,

        /// Icons per page
        #[arg(long, default_value_t = 12)]
        page_size: u32,
    },
    /// Get icon details
    Get {
        /// Icon ID
        id: String,
    },
    /// Download an icon image
    Download {
        /// Icon ID
        id: String,

        /// Size variant: original, 2k or 1k
        #[arg(long, default_value_t = IconSize::Original)]
        size: IconSize,

        /// Output file [default: <id>.png]
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle icon commands
///
/// Routes icon subcommands to their respective handlers.
///
/// # Arguments
/// * `command` - The icon command to execute
/// * `config` - The CLI configuration
pub async fn handle_icon_command(command: IconCommands, config: &Config) -> Result<()> {
    let client = config.client()?;

    match command {
        IconCommands::List {
            search,
            category,
            page,
            page_size,
        } => {
            let params = ListIconsParams {
                search,
                category,
                page: Some(page),
                page_size: Some(page_size),
            };
            list_icons(&client, &params).await
        }
        IconCommands::Get { id } => get_icon(&client, &id).await,
        IconCommands::Download { id, size, output } => {
            download_icon(&client, &id, size, output).await
        }
    }
}

/// List one page of the gallery
async fn list_icons(client: &IconsClient, params: &ListIconsParams) -> Result<()> {
    let list = client
        .list_icons(params)
        .await
        .context("Failed to list icons")?;

    if list.icons.is_empty() {
        if list.total == 0 {
            println!("{}", "No icons generated yet.".yellow());
            println!(
                "{}",
                "  Try: iconsmith generate concept \"Bitcoin\"".dimmed()
            );
        } else {
            println!(
                "{}",
                format!("Page {} is empty ({} icon(s) in total).", list.page, list.total).yellow()
            );
        }
        return Ok(());
    }

    let pages = list.total.div_ceil(u64::from(list.page_size.max(1)));
    println!(
        "{}",
        format!(
            "Showing {} of {} icon(s), page {}/{}:",
            list.icons.len(),
            list.total,
            list.page,
            pages
        )
        .bold()
    );
    println!();
    for icon in &list.icons {
        print_icon_summary(icon);
    }

    Ok(())
}

/// Get and display a single icon
async fn get_icon(client: &IconsClient, id: &str) -> Result<()> {
    let response = client
        .get_icon(id)
        .await
        .with_context(|| format!("Failed to get icon {}", id))?;

    print_icon_details(&response.icon);

    Ok(())
}

/// Download an icon image to disk
async fn download_icon(
    client: &IconsClient,
    id: &str,
    size: IconSize,
    output: Option<PathBuf>,
) -> Result<()> {
    let output = output.unwrap_or_else(|| PathBuf::from(format!("{}.png", id)));

    let bytes = client
        .download_icon(id, size)
        .await
        .with_context(|| format!("Failed to download icon {}", id))?;

    tokio::fs::write(&output, &bytes)
        .await
        .with_context(|| format!("Failed to write {}", output.display()))?;

    println!(
        "{} Saved {} ({}, {} bytes)",
        "✓".green(),
        output.display().to_string().cyan(),
        size,
        bytes.len()
    );

    Ok(())
}

/// Print an icon summary
fn print_icon_summary(icon: &Icon) {
    println!("  {} {} {}", "▸".cyan(), icon.name.bold(), icon.id.dimmed());
    println!("    Category:  {}", icon.category.label());
    if !icon.tags.is_empty() {
        println!("    Tags:      {}", icon.tags.join(", ").dimmed());
    }
    println!("    Downloads: {}", icon.download_count);
    println!();
}

/// Print detailed icon information
fn print_icon_details(icon: &Icon) {
    println!("{}", "Icon Details:".bold());
    println!("  ID:        {}", icon.id.cyan());
    println!("  Name:      {}", icon.name);
    println!(
        "  Category:  {} {}",
        icon.category.label(),
        format!("({})", icon.category).dimmed()
    );
    println!("  Image:     {}", icon.image_url);
    if let Some(thumbnail) = &icon.thumbnail_url {
        println!("  Thumbnail: {}", thumbnail);
    }
    println!("  Downloads: {}", icon.download_count);

    if let Some(created) = icon.created_at {
        println!("  Created:   {}", created.format("%Y-%m-%d %H:%M:%S"));
    }
    if let Some(updated) = icon.updated_at {
        println!("  Updated:   {}", updated.format("%Y-%m-%d %H:%M:%S"));
    }

    if !icon.tags.is_empty() {
        println!("  Tags:      {}", icon.tags.join(", "));
    }

    println!("\n{}", "Prompt:".bold());
    println!("{}", icon.prompt);

    if let Some(animation) = &icon.animation_prompt {
        println!("\n{}", "Animation prompt:".bold());
        println!("{}", animation);
    }
}
