use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Typed view of the `code_summary` contract: the fields the results
/// card renders.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CodeSummary {
    pub code_id: String,
    pub description: String,
    pub category: String,
    pub applicable_settings: Vec<String>,
    pub diagnostic_criteria: String,
    #[serde(rename = "MEAT_compliance_recommendations")]
    pub meat_compliance_recommendations: String,
}
