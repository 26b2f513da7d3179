use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_range, Validate};
use clap::Parser;

/// Bedrock inference profile the original agent was built around.
pub const DEFAULT_MODEL_ID: &str = "us.anthropic.claude-sonnet-4-5-20250929-v1:0";

#[derive(Debug, Clone, Parser)]
#[command(name = "weather-agent")]
#[command(about = "An AI agent for National Weather Service forecasts")]
pub struct CliConfig {
    /// Bedrock model identifier used for planning and summarization
    #[arg(long, default_value = DEFAULT_MODEL_ID)]
    pub model_id: String,

    /// AWS region hosting the model
    #[arg(long, default_value = "us-west-2")]
    pub region: String,

    /// Timeout for each fetch command invocation, in seconds
    #[arg(long, default_value = "30")]
    pub fetch_timeout_secs: u64,

    /// Fetch weather data with the built-in HTTP client instead of curl
    #[arg(long)]
    pub http: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn model_id(&self) -> &str {
        &self.model_id
    }

    fn region(&self) -> &str {
        &self.region
    }

    fn fetch_timeout_secs(&self) -> u64 {
        self.fetch_timeout_secs
    }

    fn use_http_fetcher(&self) -> bool {
        self.http
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("model_id", &self.model_id)?;
        validate_non_empty_string("region", &self.region)?;
        validate_range("fetch_timeout_secs", self.fetch_timeout_secs, 1, 300)?;
        Ok(())
    }
}
