use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The caller's question: an ICD-10 code or a free-text diagnostic phrase.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InterpretRequest {
    /// The ICD-10 code or diagnostic phrase to interpret.
    pub input: String,
}

impl InterpretRequest {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }

    /// The input with surrounding whitespace removed, or `None` when
    /// nothing remains. Empty requests are rejected before any model
    /// call is made.
    pub fn normalized(&self) -> Option<&str> {
        let trimmed = self.input.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }
}
