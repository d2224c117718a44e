use std::time::Duration;

use anyhow::{Context, Result};
use log::debug;
use reqwest::Client;

use crate::config::ScraperSettings;
use crate::errors;

/// HTTP fetcher for competition results pages.
///
/// Cheap to clone (`reqwest::Client` is internally reference-counted), so
/// every pool task gets its own handle over one connection pool.
#[derive(Clone)]
pub struct CompetitionFetcher {
    client: Client,
    base_url: String,
}

impl CompetitionFetcher {
    pub fn new(settings: &ScraperSettings) -> Result<Self> {
        let client = Self::build_client(settings.user_agent, settings.timeout_secs)?;

        Ok(Self {
            client,
            base_url: settings.base_url.clone(),
        })
    }

    /// Fetch the raw HTML of one competition's results page.
    ///
    /// No retries: a transport error or non-success status fails this
    /// competition only.
    pub async fn fetch_results_page(&self, comp_id: u32) -> Result<String> {
        let url = self.build_url(comp_id);
        debug!("Fetching {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| errors::fetch_context(&url))?;

        if !response.status().is_success() {
            anyhow::bail!("HTTP error: {}", response.status());
        }

        response
            .text()
            .await
            .with_context(|| errors::fetch_context(&url))
    }

    fn build_client(user_agent: &str, timeout_secs: u64) -> Result<Client> {
        Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("Failed to build HTTP client")
    }

    fn build_url(&self, comp_id: u32) -> String {
        format!("{}/SGP_CompPage.php?compid={}", self.base_url, comp_id)
    }
}
