//! Error types for the Iconsmith client

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Message used when neither the response nor the transport says anything useful
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred";

/// Errors that can occur when using the Iconsmith client
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed (connection, timeout, body decoding)
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// API returned a non-2xx status code
    #[error("API error (status {status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error message from the API
        message: String,
    },

    /// Failed to parse response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Invalid request
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Persistent token storage could not be written
    #[error("Token store error: {0}")]
    TokenStore(String),
}

impl ClientError {
    /// Create an API error from status code and message
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            status,
            message: message.into(),
        }
    }

    /// Build an API error from a non-2xx status and the raw response body
    ///
    /// FastAPI-style bodies carry the reason in `detail`; when it is a string
    /// it is used verbatim, otherwise it is rendered as JSON. When `detail` is
    /// missing, null or blank the body is never shown; the message names the
    /// status instead.
    pub fn from_response_body(status: u16, body: &str) -> Self {
        let detail = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|value| value.get("detail").cloned())
            .and_then(|detail| match detail {
                serde_json::Value::Null => None,
                serde_json::Value::String(s) => Some(s),
                other => Some(other.to_string()),
            });

        let message = match detail {
            Some(detail) if !detail.trim().is_empty() => detail,
            _ => status_message(status),
        };

        Self::api_error(status, message)
    }

    /// The human-readable reason, without the variant prefix
    ///
    /// This is the single string a UI shows regardless of where the error came from.
    pub fn message(&self) -> String {
        let message = match self {
            Self::ApiError { message, .. } => message.clone(),
            Self::RequestFailed(e) => e.to_string(),
            Self::ParseError(msg) | Self::InvalidRequest(msg) | Self::TokenStore(msg) => {
                msg.clone()
            }
        };

        if message.trim().is_empty() {
            GENERIC_ERROR_MESSAGE.to_string()
        } else {
            message
        }
    }

    /// HTTP status, when the backend answered
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } => Some(*status),
            Self::RequestFailed(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Check if this error is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ApiError { status: 404, .. })
    }

    /// Check if this error is a client error (4xx status)
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::ApiError { status, .. } if *status >= 400 && *status < 500)
    }

    /// Check if this error is a server error (5xx status)
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::ApiError { status, .. } if *status >= 500)
    }

    /// Check if the request exceeded the client timeout
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::RequestFailed(e) if e.is_timeout())
    }
}

/// Fallback reason for a response whose body explains nothing
fn status_message(status: u16) -> String {
    format!("Request failed with status code {}", status)
}
