//! Iconsmith HTTP Client
//!
//! A type-safe HTTP client for the Iconsmith icon-generation API.
//!
//! The backend does the actual work (AI image synthesis, transcript
//! extraction, background removal, storage). This crate submits jobs,
//! watches them through [`StatusPoller`], and browses the generated icons.
//!
//! # Example
//!
//! ```no_run
//! use iconsmith_client::IconsClient;
//! use iconsmith_core::dto::generate::GenerateConceptRequest;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = IconsClient::new("http://localhost:8000")?;
//!
//!     let created = client
//!         .generate_from_concept(GenerateConceptRequest::new("Bitcoin"))
//!         .await?;
//!
//!     let task = client
//!         .poll_generation_status(
//!             &created.task_id,
//!             |task| println!("{} {}%", task.status, task.progress),
//!             iconsmith_client::DEFAULT_POLL_INTERVAL,
//!         )
//!         .await?;
//!
//!     println!("Generated icons: {:?}", task.generated_icons);
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod error;
mod generate;
mod health;
mod icons;
pub mod poller;

// Re-export commonly used types
pub use auth::{FileTokenStore, NoToken, StaticToken, TokenProvider};
pub use error::{ClientError, Result};
pub use poller::{DEFAULT_POLL_INTERVAL, PollError, StatusPoller, StatusSource};

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Overall timeout applied to every request by [`IconsClient::new`]
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the Iconsmith API
///
/// One instance is meant to be shared by every call. Cloning is cheap: the
/// connection pool and the token provider are reference-counted.
///
/// Endpoints are grouped as:
/// - Health check
/// - Icon gallery (list, get, download)
/// - Generation (concept, YouTube, status, polling)
#[derive(Clone)]
pub struct IconsClient {
    /// Base URL of the API (e.g., "http://localhost:8000")
    base_url: String,
    /// HTTP client instance
    client: Client,
    /// Consulted on every request for the bearer token
    token: Arc<dyn TokenProvider>,
}

impl IconsClient {
    /// Create a new unauthenticated client with the default timeout
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the API (e.g., "http://localhost:8000")
    ///
    /// # Errors
    /// Fails if the HTTP client cannot be constructed (e.g. the TLS backend
    /// fails to initialize).
    ///
    /// # Example
    /// ```
    /// use iconsmith_client::IconsClient;
    ///
    /// let client = IconsClient::new("http://localhost:8000").unwrap();
    /// ```
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::builder(base_url).build()
    }

    /// Create a new client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    ///
    /// # Example
    /// ```
    /// use iconsmith_client::IconsClient;
    /// use reqwest::Client;
    /// use std::time::Duration;
    ///
    /// let http_client = Client::builder()
    ///     .timeout(Duration::from_secs(5))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = IconsClient::with_client("http://localhost:8000", http_client);
    /// ```
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            token: Arc::new(NoToken),
        }
    }

    /// Start configuring a client
    pub fn builder(base_url: impl Into<String>) -> IconsClientBuilder {
        IconsClientBuilder {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
            token: Arc::new(NoToken),
        }
    }

    /// Replace the token provider
    pub fn with_token_provider(mut self, provider: impl TokenProvider + 'static) -> Self {
        self.token = Arc::new(provider);
        self
    }

    /// Get the base URL of the API
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // =============================================================================
    // Request Helpers
    // =============================================================================

    /// Resolve path segments against the base URL
    ///
    /// Each segment is percent-encoded on its own, so an ID containing `/`
    /// or `?` stays a single segment.
    fn url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = Url::parse(&self.base_url).map_err(|e| {
            ClientError::InvalidRequest(format!("invalid base URL {}: {}", self.base_url, e))
        })?;

        url.path_segments_mut()
            .map_err(|_| {
                ClientError::InvalidRequest(format!("base URL {} cannot have a path", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);

        Ok(url)
    }

    /// Start a request to the given path segments, attaching the current
    /// bearer token if any
    fn request(&self, method: Method, segments: &[&str]) -> Result<RequestBuilder> {
        let url = self.url(segments)?;
        debug!("{} {}", method, url);

        let builder = self.client.request(method, url);
        Ok(match self.token.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        })
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Handle an API response and deserialize JSON
    ///
    /// Non-2xx responses are normalized through [`ClientError::from_response_body`].
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let response = Self::check_status(response).await?;

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }

    /// Handle an API response carrying binary content
    async fn handle_bytes(&self, response: reqwest::Response) -> Result<Vec<u8>> {
        let response = Self::check_status(response).await?;
        Ok(response.bytes().await?.to_vec())
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!("Request failed with status {}", status);
            return Err(ClientError::from_response_body(status.as_u16(), &body));
        }

        Ok(response)
    }
}

impl fmt::Debug for IconsClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IconsClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

/// Builder for [`IconsClient`]
pub struct IconsClientBuilder {
    base_url: String,
    timeout: Duration,
    token: Arc<dyn TokenProvider>,
}

impl IconsClientBuilder {
    /// Overall timeout for each individual request
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Source of the bearer token, consulted on every request
    pub fn token_provider(mut self, provider: impl TokenProvider + 'static) -> Self {
        self.token = Arc::new(provider);
        self
    }

    /// Build the client
    ///
    /// # Errors
    /// [`ClientError::RequestFailed`] if the HTTP client cannot be
    /// constructed (e.g. the TLS backend fails to initialize).
    pub fn build(self) -> Result<IconsClient> {
        let client = Client::builder().timeout(self.timeout).build()?;

        Ok(IconsClient {
            base_url: self.base_url.trim_end_matches('/').to_string(),
            client,
            token: self.token,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = IconsClient::new("http://localhost:8000").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000");
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = IconsClient::new("http://localhost:8000/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000");

        let client = IconsClient::builder("http://api.example.com//")
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "http://api.example.com");
    }

    #[test]
    fn test_client_with_custom_client() {
        let client = IconsClient::with_client("http://localhost:8000", Client::new());
        assert_eq!(client.base_url(), "http://localhost:8000");
    }

    #[test]
    fn test_request_attaches_current_token() {
        let client = IconsClient::new("http://localhost:8000")
            .unwrap()
            .with_token_provider(StaticToken::new("secret"));

        let request = client.request(Method::GET, &["health"]).unwrap().build().unwrap();
        assert_eq!(request.url().as_str(), "http://localhost:8000/health");
        assert_eq!(
            request.headers().get(reqwest::header::AUTHORIZATION).unwrap(),
            "Bearer secret"
        );
    }

    #[test]
    fn test_request_without_token_is_anonymous() {
        let client = IconsClient::new("http://localhost:8000").unwrap();
        let request = client.request(Method::GET, &["health"]).unwrap().build().unwrap();
        assert!(request.headers().get(reqwest::header::AUTHORIZATION).is_none());
    }

    #[test]
    fn test_path_segments_are_encoded() {
        let client = IconsClient::new("http://localhost:8000").unwrap();

        let url = client.url(&["api", "icons", "a/b?c=d"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/api/icons/a%2Fb%3Fc=d");
        assert!(url.query().is_none());

        let url = client.url(&["api", "icons", "../health"]).unwrap();
        assert_eq!(url.path(), "/api/icons/..%2Fhealth");
    }

    #[test]
    fn test_path_segments_keep_base_path() {
        let client = IconsClient::new("http://localhost:8000/v1/").unwrap();
        let url = client.url(&["api", "generate", "status", "t1"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/v1/api/generate/status/t1");
    }

    #[test]
    fn test_invalid_base_url_is_reported() {
        let client = IconsClient::new("not a url").unwrap();
        let err = client.request(Method::GET, &["health"]).unwrap_err();
        assert!(matches!(err, ClientError::InvalidRequest(_)));
    }

    #[test]
    fn test_debug_hides_token() {
        let client = IconsClient::new("http://localhost:8000")
            .unwrap()
            .with_token_provider(StaticToken::new("secret"));
        let debug = format!("{:?}", client);
        assert!(debug.contains("localhost:8000"));
        assert!(!debug.contains("secret"));
    }
}
