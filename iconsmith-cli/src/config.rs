//! Configuration module
//!
//! Handles CLI configuration: API location, request timeout and where the
//! API token is persisted.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use iconsmith_client::{FileTokenStore, IconsClient};

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the API
    pub api_url: String,

    /// Overall timeout applied to every request
    pub timeout: Duration,

    /// JSON file the token is stored in
    pub token_file: PathBuf,
}

impl Config {
    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.api_url.is_empty() {
            anyhow::bail!("api_url cannot be empty");
        }

        if !self.api_url.starts_with("http://") && !self.api_url.starts_with("https://") {
            anyhow::bail!("api_url must start with http:// or https://");
        }

        if self.timeout.is_zero() {
            anyhow::bail!("timeout must be greater than 0");
        }

        Ok(())
    }

    /// Persistent token storage
    pub fn token_store(&self) -> FileTokenStore {
        FileTokenStore::new(&self.token_file)
    }

    /// API client authenticated from the token store
    pub fn client(&self) -> anyhow::Result<IconsClient> {
        IconsClient::builder(&self.api_url)
            .timeout(self.timeout)
            .token_provider(self.token_store())
            .build()
            .context("Failed to create HTTP client")
    }
}

/// `~/.iconsmith/credentials.json`, or a relative path when no home is set
pub fn default_token_file() -> PathBuf {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
        .unwrap_or_default()
        .join(".iconsmith")
        .join("credentials.json")
}
