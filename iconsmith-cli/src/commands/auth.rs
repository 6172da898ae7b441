//! Auth command handlers
//!
//! The token lives in the JSON credentials file named by `--token-file`.
//! Every API call reads it afresh, so login and logout apply immediately.

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::*;

use crate::config::Config;

/// Auth subcommands
#[derive(Subcommand)]
pub enum AuthCommands {
    /// Store an API token
    Login {
        /// Bearer token issued by the API
        token: String,
    },
    /// Remove the stored token
    Logout,
    /// Show whether a token is stored
    Status,
}

/// Handle auth commands
pub fn handle_auth_command(command: AuthCommands, config: &Config) -> Result<()> {
    let store = config.token_store();

    match command {
        AuthCommands::Login { token } => {
            store
                .store(&token)
                .context("Failed to store token")?;
            println!(
                "{} Token saved to {}",
                "✓".green(),
                store.path().display().to_string().dimmed()
            );
        }
        AuthCommands::Logout => {
            if store.clear().context("Failed to remove token")? {
                println!("{} Logged out", "✓".green());
            } else {
                println!("{}", "No token was stored".yellow());
            }
        }
        AuthCommands::Status => match store.load().context("Failed to read token")? {
            Some(token) => {
                println!("{} Authenticated", "✓".green());
                println!("  Token: {}", mask_token(&token));
                println!("  File:  {}", store.path().display());
            }
            None => {
                println!("{}", "Not authenticated".yellow());
                println!(
                    "{}",
                    "Store a token with: iconsmith auth login <token>".dimmed()
                );
            }
        },
    }

    Ok(())
}

/// Keep only the last four characters of a token visible
fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= 8 {
        return "*".repeat(chars.len());
    }

    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}{}", "*".repeat(chars.len() - 4), tail)
}
