use crate::domain::ports::TextGenerator;
use crate::utils::error::{AgentError, Result};
use async_trait::async_trait;
use aws_sdk_bedrockruntime::error::DisplayErrorContext;
use aws_sdk_bedrockruntime::types::{
    ContentBlock, ConversationRole, InferenceConfiguration, Message,
};
use aws_sdk_bedrockruntime::Client;
use tracing::debug;

const MAX_OUTPUT_TOKENS: i32 = 2000;
const TEMPERATURE: f32 = 0.7;

/// Text generation via the Bedrock Converse API.
///
/// One outbound request per `generate` call: a single user-role text message
/// with fixed inference settings. Every SDK failure (network, auth, quota,
/// malformed response) is converted into `AgentError::Model` here; callers
/// never see the SDK's error types.
pub struct BedrockGenerator {
    client: Client,
    model_id: String,
}

impl BedrockGenerator {
    pub async fn new(region: &str, model_id: &str) -> Self {
        let sdk_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(region.to_string()))
            .load()
            .await;

        Self {
            client: Client::new(&sdk_config),
            model_id: model_id.to_string(),
        }
    }
}

#[async_trait]
impl TextGenerator for BedrockGenerator {
    async fn generate(&self, prompt: &str) -> Result<String> {
        debug!(
            "Sending {} character prompt to {}",
            prompt.len(),
            self.model_id
        );

        let message = Message::builder()
            .role(ConversationRole::User)
            .content(ContentBlock::Text(prompt.to_string()))
            .build()
            .map_err(|e| AgentError::Model {
                message: e.to_string(),
            })?;

        let response = self
            .client
            .converse()
            .model_id(&self.model_id)
            .messages(message)
            .inference_config(
                InferenceConfiguration::builder()
                    .max_tokens(MAX_OUTPUT_TOKENS)
                    .temperature(TEMPERATURE)
                    .build(),
            )
            .send()
            .await
            .map_err(|e| AgentError::Model {
                message: DisplayErrorContext(&e).to_string(),
            })?;

        let output = response.output().ok_or_else(|| AgentError::Model {
            message: "response contained no output".to_string(),
        })?;
        let message = output.as_message().map_err(|_| AgentError::Model {
            message: "response output was not a message".to_string(),
        })?;
        let text = message
            .content()
            .iter()
            .find_map(|block| block.as_text().ok())
            .ok_or_else(|| AgentError::Model {
                message: "response message contained no text content".to_string(),
            })?;

        debug!("Received {} characters from model", text.len());
        Ok(text.clone())
    }
}
