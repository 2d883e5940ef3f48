//! The interpretation pipeline.
//!
//! One call runs: normalize the input, render the prompts from the
//! response contract, invoke the completion provider under a deadline
//! with bounded retry, then parse and validate the reply. Nothing
//! reaches the caller until it has passed the contract checks.

use std::time::Duration;

use tokio::time::{sleep, timeout};
use tracing::{info, warn};
use uuid::Uuid;

use icdx_core::models::interpretation::Interpretation;
use icdx_core::models::request::InterpretRequest;
use icdx_core::models::token_count::TokenUsage;
use icdx_core::schema::ResponseSchema;
use icdx_core::validate;

use crate::error::{InterpretError, ProviderError};
use crate::prompt;
use crate::provider::{Completion, CompletionProvider, CompletionRequest};

/// Call behavior knobs.
#[derive(Debug, Clone, Copy)]
pub struct InterpreterOptions {
    /// Deadline for each completion attempt.
    pub timeout: Duration,
    /// Total attempts, including the first. `1` disables retry.
    pub max_attempts: u32,
    /// Delay before the second attempt; doubles after each failure.
    pub retry_delay: Duration,
}

impl Default for InterpreterOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(120),
            max_attempts: 2,
            retry_delay: Duration::from_secs(1),
        }
    }
}

/// The result of one interpretation, before the caller consumes it.
#[derive(Debug, Clone)]
pub struct InterpretRecord {
    pub id: Uuid,
    pub model_id: String,
    pub usage: TokenUsage,
    pub created_at: jiff::Timestamp,
    pub interpretation: Interpretation,
}

/// The interpretation service. Stateless: each request is one
/// independent provider call plus validation.
pub struct Interpreter<P> {
    provider: P,
    schema: ResponseSchema,
    options: InterpreterOptions,
}

impl<P: CompletionProvider> Interpreter<P> {
    pub fn new(provider: P, schema: ResponseSchema) -> Self {
        Self::with_options(provider, schema, InterpreterOptions::default())
    }

    pub fn with_options(provider: P, schema: ResponseSchema, options: InterpreterOptions) -> Self {
        Self {
            provider,
            schema,
            options,
        }
    }

    /// The contract replies are validated against.
    pub fn schema(&self) -> &ResponseSchema {
        &self.schema
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Interpret a code or phrase, returning just the validated record.
    pub async fn interpret(
        &self,
        request: &InterpretRequest,
    ) -> Result<Interpretation, InterpretError> {
        Ok(self.interpret_recorded(request).await?.interpretation)
    }

    /// Interpret a code or phrase, returning the validated record together
    /// with its id, model, timestamp, and token usage.
    pub async fn interpret_recorded(
        &self,
        request: &InterpretRequest,
    ) -> Result<InterpretRecord, InterpretError> {
        let input = request.normalized().ok_or(InterpretError::InvalidInput)?;

        let id = Uuid::new_v4();
        info!(
            interpretation_id = %id,
            schema = self.schema.name.as_str(),
            input_len = input.len(),
            "starting interpretation"
        );

        let system = prompt::render_system(&self.schema);
        let user = prompt::user_message(input);
        let completion = self.complete_with_retry(&system, &user).await?;

        info!(
            interpretation_id = %id,
            model = completion.model_id.as_str(),
            input_tokens = completion.usage.tokens.input,
            output_tokens = completion.usage.tokens.output,
            "completion received"
        );

        let interpretation = validate::validate_json(&self.schema, strip_fences(&completion.text))?;

        info!(interpretation_id = %id, "interpretation validated");

        Ok(InterpretRecord {
            id,
            model_id: completion.model_id,
            usage: completion.usage,
            created_at: jiff::Timestamp::now(),
            interpretation,
        })
    }

    /// Run the completion under the configured deadline, retrying provider
    /// failures with a doubling delay until the attempt budget is spent.
    /// Contract violations are never retried from here; a reply that came
    /// back at all is a provider success.
    async fn complete_with_retry(
        &self,
        system: &str,
        user: &str,
    ) -> Result<Completion, ProviderError> {
        let request = CompletionRequest {
            system,
            user,
            schema: &self.schema,
        };
        let mut delay = self.options.retry_delay;
        let mut attempt = 1;

        loop {
            let call = self.provider.complete(request);
            let outcome = match timeout(self.options.timeout, call).await {
                Ok(result) => result,
                Err(_) => Err(ProviderError::Timeout(self.options.timeout)),
            };

            match outcome {
                Ok(completion) => return Ok(completion),
                Err(error) if attempt < self.options.max_attempts => {
                    warn!(attempt, error = %error, "completion attempt failed; retrying");
                    sleep(delay).await;
                    delay *= 2;
                    attempt += 1;
                }
                Err(error) => return Err(error),
            }
        }
    }
}

/// Strip a Markdown code fence if the model wrapped its reply in one
/// despite the output rules.
fn strip_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    let rest = rest.strip_suffix("```").unwrap_or(rest);
    rest.trim()
}
