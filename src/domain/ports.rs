use crate::utils::error::Result;
use async_trait::async_trait;

/// Sends a prompt to a hosted language model and returns the generated text.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String>;
}

/// Fetches the body of a URL as text.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String>;
}

pub trait ConfigProvider: Send + Sync {
    fn model_id(&self) -> &str;
    fn region(&self) -> &str;
    fn fetch_timeout_secs(&self) -> u64;
    fn use_http_fetcher(&self) -> bool;
}
