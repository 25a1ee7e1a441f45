use anyhow::Result;
use async_trait::async_trait;

use crate::core::models::ResultSet;

#[async_trait]
pub trait QueryResultsProvider: Send + Sync {
    async fn fetch_query_results(&self, term: &str, value: &str) -> Result<ResultSet>;

    /// Follows a pagination link taken from a previous [`ResultSet`].
    async fn fetch_query_results_from_url(&self, url: &str) -> Result<ResultSet>;
}
