//! Discovery of Claude models usable for interpretation.
//!
//! Bedrock keeps two overlapping registries. `ListFoundationModels` is the
//! canonical one, with bare IDs like `anthropic.claude-sonnet-4-20250514-v1:0`
//! and a lifecycle status; `ListInferenceProfiles` lists the cross-region
//! routing wrappers (`us.`, `eu.`, `global.` prefixes) that the Converse API
//! actually accepts as its `model_id`. Newly launched models can appear in
//! the foundation registry before any profile is listed, so discovery starts
//! from ACTIVE Claude foundation models and joins in `us.` profiles,
//! constructing `us.{model_id}` whenever the profile listing lags. Starting
//! from the ACTIVE registry also drops LEGACY models automatically, even
//! though their inference profiles stay listed as active.

use std::collections::HashMap;

use aws_sdk_bedrock::types::{
    FoundationModelLifecycleStatus, InferenceProfileStatus, InferenceProfileType,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::ProviderError;

/// Inference profile used when the caller does not pick a model.
pub const DEFAULT_MODEL_ID: &str = "us.anthropic.claude-sonnet-4-20250514-v1:0";

/// A Claude model available for interpretation calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterpreterModel {
    /// Inference profile ID accepted by the Converse API.
    pub model_id: String,
    /// Human-readable name, e.g. `"US Anthropic Claude Sonnet 4"`.
    pub name: String,
}

/// List the Claude models available for interpretation, sorted by name.
pub async fn list_models(
    config: &aws_config::SdkConfig,
) -> Result<Vec<InterpreterModel>, ProviderError> {
    let client = aws_sdk_bedrock::Client::new(config);

    let registry = client
        .list_foundation_models()
        .by_provider("anthropic")
        .send()
        .await
        .map_err(|e| ProviderError::Invocation(e.into_service_error().to_string()))?;

    let profiles = us_inference_profiles(&client).await?;

    let mut models: Vec<InterpreterModel> = registry
        .model_summaries()
        .iter()
        .filter(|m| {
            let id = m.model_id();
            let active = m
                .model_lifecycle()
                .map(|lc| *lc.status() == FoundationModelLifecycleStatus::Active)
                .unwrap_or(false);
            id.contains("claude") && active && !is_context_variant(id)
        })
        .map(|m| match profiles.get(m.model_id()) {
            Some(profile) => profile.clone(),
            // The Converse API rejects bare foundation model IDs, so
            // construct the US profile ID when none was listed yet.
            None => InterpreterModel {
                model_id: format!("us.{}", m.model_id()),
                name: m.model_name().unwrap_or(m.model_id()).to_string(),
            },
        })
        .collect();

    models.sort_by(|a, b| a.name.cmp(&b.name));

    info!(count = models.len(), "discovered interpretation models");

    Ok(models)
}

/// US-scoped active Claude inference profiles, keyed by bare model ID.
async fn us_inference_profiles(
    client: &aws_sdk_bedrock::Client,
) -> Result<HashMap<String, InterpreterModel>, ProviderError> {
    let response = client
        .list_inference_profiles()
        .type_equals(InferenceProfileType::SystemDefined)
        .max_results(100)
        .send()
        .await
        .map_err(|e| ProviderError::Invocation(e.into_service_error().to_string()))?;

    let mut profiles = HashMap::new();

    for p in response.inference_profile_summaries() {
        let id = p.inference_profile_id();
        if let Some(bare_id) = id.strip_prefix("us.")
            && bare_id.contains("anthropic.claude")
            && *p.status() == InferenceProfileStatus::Active
        {
            profiles.insert(
                bare_id.to_string(),
                InterpreterModel {
                    model_id: id.to_string(),
                    name: p.inference_profile_name().to_string(),
                },
            );
        }
    }

    Ok(profiles)
}

/// Context-window variants (`:48k`, `:200k`) are registry noise; only the
/// base model ID is offered.
fn is_context_variant(model_id: &str) -> bool {
    model_id.rsplit_once(':').is_some_and(|(_, suffix)| {
        suffix != "0" && suffix.chars().next().is_some_and(|c| c.is_ascii_digit())
    })
}
