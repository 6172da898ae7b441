//! Health check DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body of `GET /health`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    #[serde(default)]
    pub environment: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default, deserialize_with = "crate::domain::deserialize_timestamp")]
    pub timestamp: Option<DateTime<Utc>>,
}
