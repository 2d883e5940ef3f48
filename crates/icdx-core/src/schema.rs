//! Response contracts.
//!
//! A [`ResponseSchema`] is data, not code: the same field list drives the
//! instruction prompt sent to the model and the validation of whatever
//! comes back, so the two can never drift apart.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The kind of value a contract field must hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FieldKind {
    /// A JSON string.
    Text,
    /// A JSON number.
    Number,
    /// A JSON array whose elements are all strings.
    TextList,
}

impl FieldKind {
    /// Name used in prompts and violation messages.
    pub fn describe(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Number => "number",
            FieldKind::TextList => "list of text",
        }
    }
}

/// One field of a response contract.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FieldSpec {
    pub name: String,
    pub kind: FieldKind,
    /// Required fields must be present and non-null in every reply.
    pub required: bool,
    /// One-line semantics, rendered into the prompt so the model knows
    /// what belongs in the field.
    pub description: String,
}

impl FieldSpec {
    pub fn text(name: &str, description: &str) -> Self {
        Self::new(name, FieldKind::Text, description)
    }

    pub fn number(name: &str, description: &str) -> Self {
        Self::new(name, FieldKind::Number, description)
    }

    pub fn text_list(name: &str, description: &str) -> Self {
        Self::new(name, FieldKind::TextList, description)
    }

    /// Mark the field optional: it may be absent or null in a reply.
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    fn new(name: &str, kind: FieldKind, description: &str) -> Self {
        Self {
            name: name.to_string(),
            kind,
            required: true,
            description: description.to_string(),
        }
    }
}

/// A named response contract: the exact field set a model reply must carry.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ResponseSchema {
    pub name: String,
    pub fields: Vec<FieldSpec>,
}

impl ResponseSchema {
    pub fn new(name: &str, fields: Vec<FieldSpec>) -> Self {
        Self {
            name: name.to_string(),
            fields,
        }
    }

    /// Look up a field by name.
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// The six-field contract behind the results view: just enough to
    /// render a code card with MEAT documentation guidance.
    pub fn code_summary() -> Self {
        Self::new(
            "code_summary",
            vec![
                FieldSpec::text("code_id", "The unique identifier for the ICD-10 code."),
                FieldSpec::text(
                    "description",
                    "A concise description of the condition the code represents.",
                ),
                FieldSpec::text(
                    "category",
                    "The clinical category or ICD-10 chapter the code belongs to.",
                ),
                FieldSpec::text_list(
                    "applicable_settings",
                    "Care settings where the code is applicable, such as inpatient, outpatient, or telehealth.",
                ),
                FieldSpec::text(
                    "diagnostic_criteria",
                    "Criteria used to diagnose the condition associated with the code.",
                ),
                FieldSpec::text(
                    "MEAT_compliance_recommendations",
                    "Documentation recommendations following the MEAT framework (Monitor, Evaluate, Assess, Treat).",
                ),
            ],
        )
    }

    /// The full research contract: everything the code workspace surfaces,
    /// from guidelines and epidemiology to reimbursement and audit notes.
    pub fn code_profile() -> Self {
        Self::new(
            "code_profile",
            vec![
                FieldSpec::text(
                    "type",
                    "The category or classification of the code (e.g., disease, symptom).",
                ),
                FieldSpec::text("code_id", "The unique identifier for the ICD-10 code."),
                FieldSpec::text(
                    "parent_code",
                    "The ICD-10 code of the broader category under which the code falls.",
                ),
                FieldSpec::text("code_title", "The official title or name of the ICD-10 code."),
                FieldSpec::text(
                    "version_number",
                    "The version of the ICD-10 code set in use (e.g., \"V24\", \"V28\").",
                )
                .optional(),
                FieldSpec::number(
                    "hcc_number",
                    "Hierarchical Condition Category number associated with the code (2023 Data).",
                )
                .optional(),
                FieldSpec::text(
                    "code_definition",
                    "A detailed explanation of what the code represents.",
                ),
                FieldSpec::text(
                    "clinical_guidelines",
                    "Guidelines for diagnosing or managing the condition associated with the code.",
                ),
                FieldSpec::text(
                    "epidemiology",
                    "Information about the distribution and determinants of the disease in a population.",
                ),
                FieldSpec::number(
                    "cost_of_care",
                    "Estimated cost associated with the treatment of conditions under this code.",
                )
                .optional(),
                FieldSpec::text_list(
                    "comorbidities",
                    "List of other conditions commonly associated with the primary condition coded.",
                ),
                FieldSpec::text(
                    "quality_of_life_impact",
                    "Information on how the condition affects patients' daily lives and overall quality of life.",
                ),
                FieldSpec::text(
                    "outcomes",
                    "Typical outcomes for the condition or its usual prognosis.",
                ),
                FieldSpec::text(
                    "prevention",
                    "Measures that can prevent the onset of the condition.",
                ),
                FieldSpec::text(
                    "demographics",
                    "Information on the populations most affected by the condition (age, sex, race, etc.).",
                ),
                FieldSpec::text(
                    "interoperability_considerations",
                    "Factors affecting how the code interoperates with different systems or software.",
                ),
                FieldSpec::text_list(
                    "frequently_associated_codes",
                    "Codes that are often reported together with this code.",
                ),
                FieldSpec::text(
                    "diagnosis_criteria",
                    "Criteria used to diagnose the condition associated with the code.",
                ),
                FieldSpec::text(
                    "chart_preparation",
                    "Guidelines on how to document the condition in medical charts.",
                ),
                FieldSpec::text(
                    "treatment_protocols",
                    "Protocols for the treatment of the condition linked to the code.",
                ),
                FieldSpec::text(
                    "medication_guidelines",
                    "Guidelines regarding medications prescribed for the condition, including dosages.",
                ),
                FieldSpec::text_list(
                    "procedural_codes_linkage",
                    "Associated CPT codes for procedures related to the ICD-10 code.",
                ),
                FieldSpec::text(
                    "severity_or_stage",
                    "Details on the severity or stage of the condition at the time of coding.",
                ),
                FieldSpec::text_list(
                    "risk_factors",
                    "Factors that increase the risk of developing the condition.",
                ),
                FieldSpec::text(
                    "statistical_incidence_and_prevalence_rates",
                    "The statistical rates of incidence and prevalence of the condition.",
                )
                .optional(),
                FieldSpec::text(
                    "legal_and_ethical_considerations",
                    "Legal or ethical issues associated with diagnosing or treating the condition.",
                ),
                FieldSpec::text(
                    "reimbursement_guidelines",
                    "Information on reimbursement practices related to the condition.",
                ),
                FieldSpec::text(
                    "international_variations",
                    "Variations in the code's usage or interpretation across different countries.",
                ),
                FieldSpec::text(
                    "historical_data",
                    "Historical changes and evolution of the code and its application.",
                ),
                FieldSpec::text_list(
                    "research_links",
                    "Links or references to recent research related to the condition.",
                ),
                FieldSpec::text_list(
                    "patient_education_resources",
                    "Educational materials available for patients regarding their condition.",
                ),
                FieldSpec::text(
                    "clinical_decision_support",
                    "Tools or systems that provide decision-making support based on the ICD-10 code.",
                ),
                FieldSpec::text(
                    "audit_criteria",
                    "Criteria for auditing the use of this ICD-10 code in clinical settings.",
                ),
                FieldSpec::text(
                    "technology_and_digital_health_links",
                    "How the code is used in technological applications like EMRs.",
                ),
                FieldSpec::text_list(
                    "inclusion_terms",
                    "Specific conditions included in this code.",
                ),
                FieldSpec::text_list(
                    "exclusion_terms",
                    "Conditions that shouldn't be coded here but somewhere else.",
                ),
                FieldSpec::text("notes", "Specific coding instructions or clinical notes."),
            ],
        )
    }
}
