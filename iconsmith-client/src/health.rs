//! Health check endpoint

use crate::IconsClient;
use crate::error::Result;
use iconsmith_core::dto::health::HealthResponse;
use reqwest::Method;

impl IconsClient {
    /// Check that the API is up
    pub async fn health_check(&self) -> Result<HealthResponse> {
        let response = self.request(Method::GET, &["health"])?.send().await?;

        self.handle_response(response).await
    }
}
