//! Bearer token providers
//!
//! The client asks its provider for a token on every outgoing request, so a
//! login or logout takes effect on the very next call without rebuilding the
//! client.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tracing::warn;

use crate::error::{ClientError, Result};

/// Key under which the bearer token is persisted
pub const AUTH_TOKEN_KEY: &str = "auth_token";

/// Source of the bearer token attached to requests
///
/// Returning `None` sends the request unauthenticated.
pub trait TokenProvider: Send + Sync {
    fn token(&self) -> Option<String>;
}

impl<F> TokenProvider for F
where
    F: Fn() -> Option<String> + Send + Sync,
{
    fn token(&self) -> Option<String> {
        self()
    }
}

/// Never authenticates
#[derive(Debug, Clone, Copy, Default)]
pub struct NoToken;

impl TokenProvider for NoToken {
    fn token(&self) -> Option<String> {
        None
    }
}

/// Always sends the same token
#[derive(Clone)]
pub struct StaticToken(String);

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

impl TokenProvider for StaticToken {
    fn token(&self) -> Option<String> {
        Some(self.0.clone())
    }
}

impl fmt::Debug for StaticToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("StaticToken(***)")
    }
}

/// Token persisted in a small JSON key/value file
///
/// The file is a JSON object; the token lives under [`AUTH_TOKEN_KEY`] and
/// any other keys are preserved on write. It is read again on every
/// [`TokenProvider::token`] call. A missing file means no token.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored token
    ///
    /// Unlike [`TokenProvider::token`], read failures are reported.
    pub fn load(&self) -> Result<Option<String>> {
        let entries = self.read_entries()?;
        Ok(entries
            .get(AUTH_TOKEN_KEY)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string))
    }

    /// Persist a token, creating the file and its directory if needed
    pub fn store(&self, token: &str) -> Result<()> {
        let token = token.trim();
        if token.is_empty() {
            return Err(ClientError::InvalidRequest(
                "token cannot be empty".to_string(),
            ));
        }

        let mut entries = self.read_entries()?;
        entries.insert(AUTH_TOKEN_KEY.to_string(), Value::String(token.to_string()));
        self.write_entries(&entries)
    }

    /// Remove the token, keeping any other stored keys
    ///
    /// Returns whether a token was present.
    pub fn clear(&self) -> Result<bool> {
        let mut entries = self.read_entries()?;
        let removed = entries.remove(AUTH_TOKEN_KEY).is_some();
        if removed {
            self.write_entries(&entries)?;
        }
        Ok(removed)
    }

    fn read_entries(&self) -> Result<Map<String, Value>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => return Err(self.store_error("read", e)),
        };

        if raw.trim().is_empty() {
            return Ok(Map::new());
        }

        match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Object(entries)) => Ok(entries),
            Ok(_) => Err(ClientError::TokenStore(format!(
                "{} does not contain a JSON object",
                self.path.display()
            ))),
            Err(e) => Err(ClientError::TokenStore(format!(
                "failed to parse {}: {}",
                self.path.display(),
                e
            ))),
        }
    }

    fn write_entries(&self, entries: &Map<String, Value>) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.store_error("create directory for", e))?;
        }

        let body = serde_json::to_string_pretty(entries)
            .map_err(|e| ClientError::TokenStore(e.to_string()))?;
        fs::write(&self.path, body).map_err(|e| self.store_error("write", e))
    }

    fn store_error(&self, action: &str, e: io::Error) -> ClientError {
        ClientError::TokenStore(format!("failed to {} {}: {}", action, self.path.display(), e))
    }
}

impl TokenProvider for FileTokenStore {
    fn token(&self) -> Option<String> {
        match self.load() {
            Ok(token) => token,
            Err(e) => {
                warn!("Ignoring unreadable token store: {}", e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn scratch_path(name: &str) -> PathBuf {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        let n = COUNTER.fetch_add(1, Ordering::SeqCst);
        std::env::temp_dir()
            .join(format!("iconsmith-auth-{}-{}", std::process::id(), n))
            .join(name)
    }

    #[test]
    fn test_missing_file_means_no_token() {
        let store = FileTokenStore::new(scratch_path("credentials.json"));
        assert_eq!(store.load().unwrap(), None);
        assert_eq!(store.token(), None);
    }

    #[test]
    fn test_store_and_clear() {
        let store = FileTokenStore::new(scratch_path("credentials.json"));

        store.store("  abc123 ").unwrap();
        assert_eq!(store.token(), Some("abc123".to_string()));

        assert!(store.clear().unwrap());
        assert_eq!(store.token(), None);
        assert!(!store.clear().unwrap());
    }

    #[test]
    fn test_token_read_fresh_each_time() {
        let path = scratch_path("credentials.json");
        let store = FileTokenStore::new(&path);

        store.store("first").unwrap();
        assert_eq!(store.token().as_deref(), Some("first"));

        fs::write(&path, r#"{"auth_token":"second"}"#).unwrap();
        assert_eq!(store.token().as_deref(), Some("second"));
    }

    #[test]
    fn test_other_keys_preserved() {
        let path = scratch_path("credentials.json");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, r#"{"theme":"dark"}"#).unwrap();

        let store = FileTokenStore::new(&path);
        store.store("tok").unwrap();
        store.clear().unwrap();

        let raw: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw, serde_json::json!({ "theme": "dark" }));
    }

    #[test]
    fn test_corrupt_file_is_anonymous_but_reported() {
        let path = scratch_path("credentials.json");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "[1, 2, 3]").unwrap();

        let store = FileTokenStore::new(&path);
        assert!(store.load().is_err());
        assert_eq!(store.token(), None);
    }

    #[test]
    fn test_empty_token_rejected() {
        let store = FileTokenStore::new(scratch_path("credentials.json"));
        assert!(store.store("   ").is_err());
    }

    #[test]
    fn test_closure_provider() {
        let provider = || Some("from-closure".to_string());
        assert_eq!(provider.token().as_deref(), Some("from-closure"));
        assert_eq!(NoToken.token(), None);
        assert_eq!(StaticToken::new("s").token().as_deref(), Some("s"));
    }
}
