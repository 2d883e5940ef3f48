use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use ts_rs::TS;

use crate::schema::FieldKind;

/// A single field-level failure found while validating a model payload.
#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct FieldViolation {
    pub field: String,
    pub kind: ViolationKind,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ViolationKind {
    /// A required field is absent, or present as null.
    MissingRequired,
    /// The value does not match the declared field kind.
    WrongType,
}

impl FieldViolation {
    pub fn missing(field: &str) -> Self {
        Self {
            field: field.to_string(),
            kind: ViolationKind::MissingRequired,
            message: format!("required field '{field}' is missing"),
        }
    }

    pub fn wrong_type(field: &str, expected: FieldKind, found: &Value) -> Self {
        let message = if expected == FieldKind::TextList && found.is_array() {
            format!("field '{field}' must be a list of text, but not every element is text")
        } else {
            format!(
                "field '{field}' must be {}, got {}",
                expected.describe(),
                json_type_name(found)
            )
        };
        Self {
            field: field.to_string(),
            kind: ViolationKind::WrongType,
            message,
        }
    }
}

/// Why a model payload was rejected.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The payload was not parseable as JSON at all.
    #[error("payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The payload parsed, but the top level is not a JSON object.
    #[error("payload is not a JSON object")]
    NotAnObject,

    /// One or more fields failed the contract. Every violation in the
    /// payload is reported, not just the first.
    #[error("payload does not satisfy the '{schema}' contract: {}", join_messages(.violations))]
    Violations {
        schema: String,
        violations: Vec<FieldViolation>,
    },
}

fn join_messages(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|violation| violation.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
