//! The production completion provider, backed by the Bedrock Converse API.

use async_trait::async_trait;
use aws_sdk_bedrockruntime::Client;
use aws_sdk_bedrockruntime::types::{ContentBlock, ConversationRole, Message, SystemContentBlock};

use icdx_core::models::token_count::TokenUsage;

use crate::error::ProviderError;
use crate::provider::{Completion, CompletionProvider, CompletionRequest};
use crate::tokens;

/// [`CompletionProvider`] that sends the rendered prompts through the
/// Converse API; the contract arrives at the model inside the system
/// prompt.
#[derive(Debug, Clone)]
pub struct ConverseProvider {
    client: Client,
    model_id: String,
}

impl ConverseProvider {
    /// `model_id` must be an inference profile ID such as
    /// `us.anthropic.claude-sonnet-4-20250514-v1:0`. Bare foundation model
    /// IDs fail with "on-demand throughput isn't supported".
    pub fn new(config: &aws_config::SdkConfig, model_id: impl Into<String>) -> Self {
        Self {
            client: Client::new(config),
            model_id: model_id.into(),
        }
    }
}

#[async_trait]
impl CompletionProvider for ConverseProvider {
    async fn complete(
        &self,
        request: CompletionRequest<'_>,
    ) -> Result<Completion, ProviderError> {
        let pricing = tokens::get_pricing(&self.model_id);

        let response = self
            .client
            .converse()
            .model_id(&self.model_id)
            .system(SystemContentBlock::Text(request.system.to_string()))
            .messages(
                Message::builder()
                    .role(ConversationRole::User)
                    .content(ContentBlock::Text(request.user.to_string()))
                    .build()
                    .map_err(|e| ProviderError::Invocation(e.to_string()))?,
            )
            .send()
            .await
            .map_err(|e| ProviderError::Invocation(e.into_service_error().to_string()))?;

        let usage = response
            .usage()
            .map(|u| tokens::priced_usage(tokens::extract_token_usage(u), pricing.as_ref()))
            .unwrap_or(TokenUsage::zero());

        let output_message = response
            .output()
            .and_then(|o| o.as_message().ok())
            .ok_or(ProviderError::NoContent)?;

        let text = output_message
            .content()
            .iter()
            .filter_map(|block| {
                if let ContentBlock::Text(text) = block {
                    Some(text.as_str())
                } else {
                    None
                }
            })
            .collect::<Vec<_>>()
            .join("");

        if text.is_empty() {
            return Err(ProviderError::NoContent);
        }

        Ok(Completion {
            text,
            model_id: self.model_id.clone(),
            usage,
        })
    }
}
