//! Payload validation.
//!
//! Model output is untrusted text until it has passed through here.
//! Validation is driven entirely by the [`ResponseSchema`], so adding a
//! field to a contract changes the prompt and the checks in one place.

use serde_json::{Map, Value};

use crate::error::{FieldViolation, ValidationError};
use crate::models::interpretation::Interpretation;
use crate::schema::{FieldKind, ResponseSchema};

/// Parse raw model output as JSON and validate it against `schema`.
pub fn validate_json(
    schema: &ResponseSchema,
    payload: &str,
) -> Result<Interpretation, ValidationError> {
    let value: Value = serde_json::from_str(payload)?;
    validate(schema, &value)
}

/// Validate a parsed payload against `schema`.
///
/// Every declared field is checked for presence and kind; fields the
/// contract does not declare are dropped. Violations are collected across
/// the whole payload so one bad reply reports everything wrong with it.
/// On success the record carries exactly the declared fields that were
/// present.
pub fn validate(
    schema: &ResponseSchema,
    payload: &Value,
) -> Result<Interpretation, ValidationError> {
    let object = payload.as_object().ok_or(ValidationError::NotAnObject)?;

    let mut fields = Map::new();
    let mut violations = Vec::new();

    for spec in &schema.fields {
        let value = match object.get(&spec.name) {
            // Null counts as absent. The contract has no nullable kinds,
            // so a null required field is a missing required field.
            None | Some(Value::Null) => {
                if spec.required {
                    violations.push(FieldViolation::missing(&spec.name));
                }
                continue;
            }
            Some(value) => value,
        };

        if conforms(spec.kind, value) {
            fields.insert(spec.name.clone(), value.clone());
        } else {
            violations.push(FieldViolation::wrong_type(&spec.name, spec.kind, value));
        }
    }

    if violations.is_empty() {
        Ok(Interpretation::new(schema.name.clone(), fields))
    } else {
        Err(ValidationError::Violations {
            schema: schema.name.clone(),
            violations,
        })
    }
}

fn conforms(kind: FieldKind, value: &Value) -> bool {
    match kind {
        FieldKind::Text => value.is_string(),
        FieldKind::Number => value.is_number(),
        FieldKind::TextList => value
            .as_array()
            .is_some_and(|items| items.iter().all(Value::is_string)),
    }
}
