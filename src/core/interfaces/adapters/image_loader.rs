use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait ImageLoader: Send + Sync {
    async fn load_image(&self, url: &str) -> Result<Vec<u8>>;
}
