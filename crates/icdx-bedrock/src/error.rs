use std::time::Duration;

use thiserror::Error;

use icdx_core::error::ValidationError;

/// A failure from the completion endpoint itself.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The model invocation failed: network fault, throttling, or a
    /// service error from Bedrock.
    #[error("model invocation failed: {0}")]
    Invocation(String),

    /// The model replied without any text content.
    #[error("model returned no text content")]
    NoContent,

    /// One attempt exceeded the configured deadline.
    #[error("completion timed out after {0:?}")]
    Timeout(Duration),
}

/// The interpretation service's failure outcome. Exactly one of three
/// kinds, so callers can dispatch on the variant alone.
#[derive(Debug, Error)]
pub enum InterpretError {
    /// The input was empty after trimming. No model call was made.
    #[error("input is empty; nothing to interpret")]
    InvalidInput,

    /// The completion call failed after the retry budget was spent.
    #[error("provider unavailable: {0}")]
    ProviderUnavailable(#[from] ProviderError),

    /// The model answered, but the payload failed JSON parsing or the
    /// field checks. Never retried: the reply itself is the problem.
    #[error("response did not conform to the expected schema: {0}")]
    SchemaViolation(#[from] ValidationError),
}
