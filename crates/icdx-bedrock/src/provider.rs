use async_trait::async_trait;

use icdx_core::models::token_count::TokenUsage;
use icdx_core::schema::ResponseSchema;

use crate::error::ProviderError;

/// One completion call: the rendered prompts plus the machine-readable
/// contract the reply must satisfy.
///
/// The schema rides along so a provider with native structured-output
/// support can constrain generation directly. The Converse provider
/// relies on the contract already rendered into `system`.
#[derive(Debug, Clone, Copy)]
pub struct CompletionRequest<'a> {
    pub system: &'a str,
    pub user: &'a str,
    pub schema: &'a ResponseSchema,
}

/// A model reply: raw text, untrusted until validated.
#[derive(Debug, Clone)]
pub struct Completion {
    pub text: String,
    pub model_id: String,
    pub usage: TokenUsage,
}

/// A generative-model completion endpoint.
///
/// The production implementation is [`crate::converse::ConverseProvider`];
/// tests swap in scripted stand-ins.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn complete(
        &self,
        request: CompletionRequest<'_>,
    ) -> Result<Completion, ProviderError>;
}
