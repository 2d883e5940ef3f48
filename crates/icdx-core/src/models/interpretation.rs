use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// A validated interpretation: the structured details for one code.
///
/// Constructed only by [`crate::validate::validate`], and never mutated
/// afterwards, so holding an `Interpretation` means every field in it has
/// passed the contract checks.
#[derive(Debug, Clone, PartialEq)]
pub struct Interpretation {
    schema: String,
    fields: Map<String, Value>,
}

impl Interpretation {
    pub(crate) fn new(schema: String, fields: Map<String, Value>) -> Self {
        Self { schema, fields }
    }

    /// Name of the contract this record validated against.
    pub fn schema(&self) -> &str {
        &self.schema
    }

    /// Raw value of a field, if present.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// A text field, if present.
    pub fn text(&self, field: &str) -> Option<&str> {
        self.fields.get(field).and_then(Value::as_str)
    }

    /// A number field, if present.
    pub fn number(&self, field: &str) -> Option<f64> {
        self.fields.get(field).and_then(Value::as_f64)
    }

    /// A list-of-text field, if present.
    pub fn text_list(&self, field: &str) -> Option<Vec<&str>> {
        self.fields
            .get(field)
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(Value::as_str).collect())
    }

    /// All validated fields.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// The record as a plain JSON object.
    pub fn to_value(&self) -> Value {
        Value::Object(self.fields.clone())
    }

    /// Decode the record into a typed view such as
    /// [`crate::models::summary::CodeSummary`] or
    /// [`crate::models::profile::CodeProfile`].
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_value(self.to_value())
    }
}
