pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::{BedrockGenerator, CommandFetcher, HttpFetcher};
pub use crate::config::CliConfig;
pub use crate::core::agent::WeatherAgent;
pub use crate::domain::ports::{ConfigProvider, Fetcher, TextGenerator};
pub use crate::utils::error::{AgentError, Result};
