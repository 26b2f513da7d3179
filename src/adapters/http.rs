use crate::domain::ports::Fetcher;
use crate::utils::error::{AgentError, Result};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

/// Built-in HTTP fetcher, selected with `--http`. Unlike the curl wrapper it
/// treats non-2xx statuses as failures instead of handing the error body to
/// the parser.
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(timeout_secs: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(concat!("weather-agent/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        debug!("GET {}", url);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        debug!("Response status: {}", status);
        if !status.is_success() {
            return Err(AgentError::Fetch {
                message: format!("HTTP {status} from {url}"),
            });
        }

        Ok(response.text().await?)
    }
}
