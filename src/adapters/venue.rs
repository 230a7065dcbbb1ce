use crate::core::schedule::select_listing_blocks;
use crate::core::{ListingBlock, ScheduleSource};
use crate::utils::error::{Result, ShowtextError};
use async_trait::async_trait;
use reqwest::Client;

/// The venue's public calendar page.
pub struct VenuePage {
    client: Client,
    url: String,
}

impl VenuePage {
    pub fn new(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl ScheduleSource for VenuePage {
    async fn fetch_listing_blocks(&self) -> Result<Vec<ListingBlock>> {
        tracing::debug!("Fetching schedule page: {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| ShowtextError::fetch(&self.url, e))?;

        let status = response.status();
        tracing::debug!("Schedule page status: {}", status);
        if !status.is_success() {
            return Err(ShowtextError::fetch(&self.url, format!("HTTP {}", status)));
        }

        let html = response
            .text()
            .await
            .map_err(|e| ShowtextError::fetch(&self.url, e))?;

        select_listing_blocks(&html)
    }
}
