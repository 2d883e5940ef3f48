use serde_json::{Value, json};

use icdx_core::error::{ValidationError, ViolationKind};
use icdx_core::schema::ResponseSchema;
use icdx_core::validate::{validate, validate_json};

fn summary_payload() -> Value {
    json!({
        "code_id": "E11.9",
        "description": "Type 2 diabetes mellitus without complications",
        "category": "Endocrine, nutritional and metabolic diseases",
        "applicable_settings": ["inpatient", "outpatient", "telehealth"],
        "diagnostic_criteria": "HbA1c of 6.5% or higher on two separate tests.",
        "MEAT_compliance_recommendations": "Document glucose monitoring, HbA1c evaluation, complication assessment, and the current treatment plan."
    })
}

fn expect_violations(result: Result<impl std::fmt::Debug, ValidationError>) -> Vec<icdx_core::error::FieldViolation> {
    match result {
        Err(ValidationError::Violations { violations, .. }) => violations,
        other => panic!("expected field violations, got {other:?}"),
    }
}

#[test]
fn conforming_payload_is_accepted() {
    let schema = ResponseSchema::code_summary();
    let record = validate(&schema, &summary_payload()).expect("payload conforms");

    assert_eq!(record.schema(), "code_summary");
    assert_eq!(record.text("code_id"), Some("E11.9"));
    assert_eq!(
        record.text("description"),
        Some("Type 2 diabetes mellitus without complications")
    );
    assert_eq!(
        record.text_list("applicable_settings"),
        Some(vec!["inpatient", "outpatient", "telehealth"])
    );
    assert_eq!(record.fields().len(), 6);
}

#[test]
fn missing_required_field_is_reported_by_name() {
    let schema = ResponseSchema::code_summary();
    let mut payload = summary_payload();
    payload.as_object_mut().unwrap().remove("code_id");

    let violations = expect_violations(validate(&schema, &payload));
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].field, "code_id");
    assert_eq!(violations[0].kind, ViolationKind::MissingRequired);
}

#[test]
fn null_required_field_counts_as_missing() {
    let schema = ResponseSchema::code_summary();
    let mut payload = summary_payload();
    payload["diagnostic_criteria"] = Value::Null;

    let violations = expect_violations(validate(&schema, &payload));
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].field, "diagnostic_criteria");
    assert_eq!(violations[0].kind, ViolationKind::MissingRequired);
}

#[test]
fn scalar_where_list_expected_is_a_type_violation() {
    let schema = ResponseSchema::code_summary();
    let mut payload = summary_payload();
    payload["applicable_settings"] = json!("inpatient");

    let violations = expect_violations(validate(&schema, &payload));
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].field, "applicable_settings");
    assert_eq!(violations[0].kind, ViolationKind::WrongType);
    assert!(violations[0].message.contains("list of text"));
}

#[test]
fn list_with_non_text_element_is_a_type_violation() {
    let schema = ResponseSchema::code_summary();
    let mut payload = summary_payload();
    payload["applicable_settings"] = json!(["inpatient", 3, "telehealth"]);

    let violations = expect_violations(validate(&schema, &payload));
    assert_eq!(violations[0].field, "applicable_settings");
    assert_eq!(violations[0].kind, ViolationKind::WrongType);
}

#[test]
fn empty_list_satisfies_a_list_field() {
    let schema = ResponseSchema::code_summary();
    let mut payload = summary_payload();
    payload["applicable_settings"] = json!([]);

    let record = validate(&schema, &payload).expect("empty list conforms");
    assert_eq!(record.text_list("applicable_settings"), Some(vec![]));
    assert_eq!(record.fields().len(), 6);
}

#[test]
fn number_where_text_expected_is_a_type_violation() {
    let schema = ResponseSchema::code_summary();
    let mut payload = summary_payload();
    payload["category"] = json!(4);

    let violations = expect_violations(validate(&schema, &payload));
    assert_eq!(violations[0].field, "category");
    assert!(violations[0].message.contains("must be text"));
}

#[test]
fn all_violations_are_collected_not_just_the_first() {
    let schema = ResponseSchema::code_summary();
    let mut payload = summary_payload();
    {
        let object = payload.as_object_mut().unwrap();
        object.remove("code_id");
        object.remove("description");
        object.insert("category".to_string(), json!(false));
    }

    let violations = expect_violations(validate(&schema, &payload));
    assert_eq!(violations.len(), 3);

    let fields: Vec<&str> = violations.iter().map(|v| v.field.as_str()).collect();
    assert!(fields.contains(&"code_id"));
    assert!(fields.contains(&"description"));
    assert!(fields.contains(&"category"));
}

#[test]
fn undeclared_fields_are_dropped() {
    let schema = ResponseSchema::code_summary();
    let mut payload = summary_payload();
    payload["confidence"] = json!(0.97);
    payload["reasoning"] = json!("Matched on the unspecified-complications axis.");

    let record = validate(&schema, &payload).expect("extra fields are not an error");
    assert_eq!(record.get("confidence"), None);
    assert_eq!(record.get("reasoning"), None);
    assert_eq!(record.fields().len(), 6);
}

#[test]
fn optional_fields_may_be_absent_or_null() {
    let schema = ResponseSchema::code_profile();
    assert!(!schema.field("hcc_number").unwrap().required);

    let mut payload = profile_payload();
    payload.as_object_mut().unwrap().remove("version_number");
    payload["hcc_number"] = Value::Null;

    let record = validate(&schema, &payload).expect("optional fields may be omitted");
    assert_eq!(record.get("version_number"), None);
    assert_eq!(record.get("hcc_number"), None);
    assert_eq!(record.number("cost_of_care"), Some(9601.0));
}

#[test]
fn optional_field_with_wrong_kind_is_still_a_violation() {
    let schema = ResponseSchema::code_profile();
    let mut payload = profile_payload();
    payload["hcc_number"] = json!("nineteen");

    let violations = expect_violations(validate(&schema, &payload));
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].field, "hcc_number");
    assert_eq!(violations[0].kind, ViolationKind::WrongType);
    assert!(violations[0].message.contains("must be number"));
}

#[test]
fn non_object_payloads_are_rejected() {
    let schema = ResponseSchema::code_summary();

    let result = validate(&schema, &json!(["E11.9"]));
    assert!(matches!(result, Err(ValidationError::NotAnObject)));

    let result = validate(&schema, &json!("E11.9"));
    assert!(matches!(result, Err(ValidationError::NotAnObject)));
}

#[test]
fn unparseable_text_is_a_json_error() {
    let schema = ResponseSchema::code_summary();
    let result = validate_json(&schema, "Sorry, I cannot help with that request.");
    assert!(matches!(result, Err(ValidationError::Json(_))));
}

#[test]
fn validation_is_idempotent_on_its_own_output() {
    let schema = ResponseSchema::code_summary();
    let first = validate(&schema, &summary_payload()).expect("payload conforms");
    let second = validate(&schema, &first.to_value()).expect("validated output conforms");
    assert_eq!(first, second);
}

#[test]
fn violation_messages_survive_into_display() {
    let schema = ResponseSchema::code_summary();
    let mut payload = summary_payload();
    payload.as_object_mut().unwrap().remove("code_id");

    let error = validate(&schema, &payload).unwrap_err();
    let rendered = error.to_string();
    assert!(rendered.contains("code_summary"));
    assert!(rendered.contains("code_id"));
}

fn profile_payload() -> Value {
    json!({
        "type": "disease",
        "code_id": "E11.9",
        "parent_code": "E11",
        "code_title": "Type 2 diabetes mellitus without complications",
        "version_number": "V28",
        "hcc_number": 19,
        "code_definition": "Type 2 diabetes mellitus not documented with any complication.",
        "clinical_guidelines": "ADA Standards of Care; confirm with repeat HbA1c when asymptomatic.",
        "epidemiology": "Affects roughly one in ten US adults; prevalence rises with age.",
        "cost_of_care": 9601.0,
        "comorbidities": ["hypertension", "hyperlipidemia", "obesity"],
        "quality_of_life_impact": "Daily self-management burden; complications reduce function over time.",
        "outcomes": "Good glycemic control delays microvascular and macrovascular complications.",
        "prevention": "Weight management, physical activity, and dietary modification.",
        "demographics": "Most common after age 45; higher prevalence in some ethnic groups.",
        "interoperability_considerations": "Maps to SNOMED CT 44054006 in most EHR terminologies.",
        "frequently_associated_codes": ["I10", "E78.5"],
        "diagnosis_criteria": "HbA1c >= 6.5%, fasting glucose >= 126 mg/dL, or a positive tolerance test.",
        "chart_preparation": "Record monitoring, evaluation, assessment, and treatment each visit.",
        "treatment_protocols": "Metformin first line unless contraindicated; escalate per guidelines.",
        "medication_guidelines": "Metformin 500 mg titrated to effect; adjust for renal function.",
        "procedural_codes_linkage": ["83036", "82947"],
        "severity_or_stage": "Unspecified; no complications documented.",
        "risk_factors": ["family history", "sedentary lifestyle", "obesity"],
        "statistical_incidence_and_prevalence_rates": "Incidence about 5.9 per 1000 adults per year.",
        "legal_and_ethical_considerations": "Coding must reflect documented care; upcoding is fraud.",
        "reimbursement_guidelines": "HCC risk adjustment applies under Medicare Advantage.",
        "international_variations": "ICD-10-CM specific; WHO ICD-10 uses E11.9 with different notes.",
        "historical_data": "Carried over from ICD-9 250.00 in the 2015 transition.",
        "research_links": ["https://diabetesjournals.org/care"],
        "patient_education_resources": ["https://www.cdc.gov/diabetes"],
        "clinical_decision_support": "Glycemic alert rules commonly key on this code.",
        "audit_criteria": "Verify MEAT evidence for each encounter reporting the code.",
        "technology_and_digital_health_links": "Used in EMR problem lists and CGM integrations.",
        "inclusion_terms": ["Type 2 diabetes mellitus NOS"],
        "exclusion_terms": ["E10.9 Type 1 diabetes mellitus without complications"],
        "notes": "Use additional codes to identify control status where documented."
    })
}
