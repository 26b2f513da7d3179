use thiserror::Error;

#[derive(Error, Debug)]
pub enum AgentError {
    #[error("Error calling model: {message}")]
    Model { message: String },

    #[error("{message}")]
    Fetch { message: String },

    #[error("Request timed out after {seconds} seconds")]
    FetchTimeout { seconds: u64 },

    #[error("API request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("AI generated invalid URL: {output}")]
    InvalidPlan { output: String },

    #[error("Error parsing Points API response: {0}")]
    PointsParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl AgentError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // Remote services can fail transiently; the next loop iteration
            // may succeed.
            AgentError::Model { .. }
            | AgentError::Fetch { .. }
            | AgentError::FetchTimeout { .. }
            | AgentError::Http(_) => ErrorSeverity::Medium,

            AgentError::InvalidPlan { .. } | AgentError::PointsParse(_) => ErrorSeverity::High,

            AgentError::Io(_) => ErrorSeverity::High,

            AgentError::InvalidConfigValue { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            AgentError::Model { .. } => {
                "The language model call failed. Check your AWS credentials and model access."
                    .to_string()
            }
            AgentError::Fetch { .. } | AgentError::Http(_) => {
                "Unable to reach the weather service. Check your internet connection.".to_string()
            }
            AgentError::FetchTimeout { seconds } => {
                format!("The weather service did not respond within {seconds} seconds.")
            }
            AgentError::InvalidPlan { .. } => {
                "The model did not produce a usable weather API URL.".to_string()
            }
            AgentError::PointsParse(_) => {
                "The weather service returned an unexpected response.".to_string()
            }
            AgentError::Io(_) => "A console or file operation failed.".to_string(),
            AgentError::InvalidConfigValue { field, reason, .. } => {
                format!("Configuration value for {field} is invalid: {reason}")
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            AgentError::Model { .. } => {
                "Verify AWS credentials are configured and the model id is enabled in the region"
            }
            AgentError::Fetch { .. } | AgentError::Http(_) | AgentError::FetchTimeout { .. } => {
                "Retry in a moment, or try another location"
            }
            AgentError::InvalidPlan { .. } => "Retry with a more specific location description",
            AgentError::PointsParse(_) => "Retry; the weather service may be degraded",
            AgentError::Io(_) => "Check the terminal and filesystem state",
            AgentError::InvalidConfigValue { .. } => {
                "Run with --help and correct the command-line arguments"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, AgentError>;
