//! Icon gallery endpoints
//!
//! Parameters are passed through untouched; paging, search and filtering
//! all happen on the backend.

use crate::IconsClient;
use crate::error::Result;
use iconsmith_core::domain::icon::IconSize;
use iconsmith_core::dto::icon::{IconList, IconResponse, ListIconsParams};
use reqwest::Method;

impl IconsClient {
    // =============================================================================
    // Icon Queries
    // =============================================================================

    /// List one page of icons
    ///
    /// # Arguments
    /// * `params` - Search, category filter and paging
    ///
    /// # Returns
    /// The page as reported by the backend. An empty gallery is a successful
    /// response with `total == 0`, not an error.
    ///
    /// # Example
    /// ```no_run
    /// # use iconsmith_client::IconsClient;
    /// # use iconsmith_core::dto::icon::ListIconsParams;
    /// # async fn example() -> anyhow::Result<()> {
    /// let client = IconsClient::new("http://localhost:8000")?;
    /// let page = client.list_icons(&ListIconsParams::page(1, 12)).await?;
    /// println!("{} icon(s) in total", page.total);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn list_icons(&self, params: &ListIconsParams) -> Result<IconList> {
        let response = self
            .request(Method::GET, &["api", "icons"])?
            .query(params)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Get a single icon by ID
    pub async fn get_icon(&self, icon_id: &str) -> Result<IconResponse> {
        let response = self
            .request(Method::GET, &["api", "icons", icon_id])?
            .send()
            .await?;

        self.handle_response(response).await
    }

    // =============================================================================
    // Icon Download
    // =============================================================================

    /// Download the image content of an icon
    ///
    /// # Arguments
    /// * `icon_id` - The icon ID
    /// * `size` - Size variant to fetch
    ///
    /// # Returns
    /// The raw image bytes
    pub async fn download_icon(&self, icon_id: &str, size: IconSize) -> Result<Vec<u8>> {
        let response = self
            .request(Method::GET, &["api", "icons", icon_id, "download"])?
            .query(&[("size", size.as_str())])
            .send()
            .await?;

        self.handle_bytes(response).await
    }
}
