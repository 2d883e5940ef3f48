//! Instruction prompt rendering.
//!
//! The system prompt establishes the coding-assistant persona, mandates a
//! single JSON object, and enumerates the response contract field by
//! field. The user message carries the code or phrase verbatim. Both are
//! derived from the same [`ResponseSchema`] the validator later enforces.

use icdx_core::schema::ResponseSchema;

const PERSONA: &str = "You are a clinical medical coding assistant for the Codex SaaS \
application. Given an ICD-10 code or diagnostic phrase, return a structured JSON object \
with comprehensive details about the code.";

const OUTPUT_RULES: &str = "Your entire output must be a single valid JSON object with \
exactly the fields listed below. Populate all fields with relevant information. If \
information for a field is not available, provide a reasonable default or indicate that \
it's not applicable. Do not wrap the object in Markdown fences and do not add any \
commentary outside the JSON object.";

/// Render the full system prompt for `schema`: persona, output rules, and
/// the field contract.
pub fn render_system(schema: &ResponseSchema) -> String {
    format!("{PERSONA}\n\n{OUTPUT_RULES}\n\n{}", field_contract(schema))
}

/// Enumerate every field of the contract, one line per field, with its
/// kind, requiredness, and description.
pub fn field_contract(schema: &ResponseSchema) -> String {
    let mut block = String::from("The JSON object must contain these fields:\n");
    for field in &schema.fields {
        let requirement = if field.required { "required" } else { "optional" };
        block.push_str(&format!(
            "- \"{}\" ({}, {}): {}\n",
            field.name,
            field.kind.describe(),
            requirement,
            field.description,
        ));
    }
    block
}

/// The user message: the request input embedded verbatim.
pub fn user_message(input: &str) -> String {
    format!("Input:\n{input}")
}
