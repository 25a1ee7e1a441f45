use anyhow::{Context, Result};
use async_trait::async_trait;

use crate::core::interfaces::adapters::QueryResultsProvider;
use crate::core::models::ResultSet;

pub struct HarvardArtMuseumsProvider {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl HarvardArtMuseumsProvider {
    pub fn new(client: reqwest::Client, base_url: String, api_key: String) -> Self {
        Self {
            client,
            base_url,
            api_key,
        }
    }

    /// Hyphen-joined values become `|`, which the API reads as OR.
    fn construct_query_url(&self, term: &str, value: &str) -> String {
        let alternatives = value.split('-').collect::<Vec<_>>().join("|");

        format!(
            "{}/object?apikey={}&{}={}",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(&self.api_key),
            urlencoding::encode(term),
            urlencoding::encode(&alternatives)
        )
    }

    async fn fetch_result_set(&self, url: &str) -> Result<ResultSet> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .context("Collection API request failed")?
            .error_for_status()
            .context("Collection API returned an error status")?;

        let results = response
            .json::<ResultSet>()
            .await
            .context("Collection API returned an unreadable body")?;

        Ok(results)
    }
}

#[async_trait]
impl QueryResultsProvider for HarvardArtMuseumsProvider {
    async fn fetch_query_results(&self, term: &str, value: &str) -> Result<ResultSet> {
        let url = self.construct_query_url(term, value);

        log::info!("[HARVARD_API] Querying objects by {}", term);
        log::debug!("[HARVARD_API] Query URL: {}", url);

        self.fetch_result_set(&url).await
    }

    async fn fetch_query_results_from_url(&self, url: &str) -> Result<ResultSet> {
        log::info!("[HARVARD_API] Fetching results page");
        log::debug!("[HARVARD_API] Page URL: {}", url);

        self.fetch_result_set(url).await
    }
}
