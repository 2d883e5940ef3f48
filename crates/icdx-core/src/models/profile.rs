use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Typed view of the full `code_profile` contract.
///
/// Optional contract fields become `Option` here; the serde defaults let
/// a record that legitimately omitted them still decode.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CodeProfile {
    // Identity
    #[serde(rename = "type")]
    pub code_type: String,
    pub code_id: String,
    pub parent_code: String,
    pub code_title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hcc_number: Option<f64>,

    // Clinical content
    pub code_definition: String,
    pub clinical_guidelines: String,
    pub epidemiology: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost_of_care: Option<f64>,
    pub comorbidities: Vec<String>,
    pub quality_of_life_impact: String,
    pub outcomes: String,
    pub prevention: String,
    pub demographics: String,
    pub interoperability_considerations: String,
    pub frequently_associated_codes: Vec<String>,
    pub diagnosis_criteria: String,
    pub chart_preparation: String,
    pub treatment_protocols: String,
    pub medication_guidelines: String,
    pub procedural_codes_linkage: Vec<String>,
    pub severity_or_stage: String,
    pub risk_factors: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statistical_incidence_and_prevalence_rates: Option<String>,

    // Administrative context
    pub legal_and_ethical_considerations: String,
    pub reimbursement_guidelines: String,
    pub international_variations: String,
    pub historical_data: String,
    pub research_links: Vec<String>,
    pub patient_education_resources: Vec<String>,
    pub clinical_decision_support: String,
    pub audit_criteria: String,
    pub technology_and_digital_health_links: String,
    pub inclusion_terms: Vec<String>,
    pub exclusion_terms: Vec<String>,
    pub notes: String,
}
