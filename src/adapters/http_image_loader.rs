use anyhow::{Context, Result};
use async_trait::async_trait;

use crate::core::interfaces::adapters::ImageLoader;

pub struct HttpImageLoader {
    client: reqwest::Client,
}

impl HttpImageLoader {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ImageLoader for HttpImageLoader {
    async fn load_image(&self, url: &str) -> Result<Vec<u8>> {
        log::debug!("[IMAGE_LOADER] Downloading {}", url);

        let bytes = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("Image request failed for {}", url))?
            .error_for_status()?
            .bytes()
            .await?;

        log::debug!("[IMAGE_LOADER] Downloaded {} bytes from {}", bytes.len(), url);
        Ok(bytes.to_vec())
    }
}
