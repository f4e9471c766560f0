//! Two-Phase Analysis Pipeline
//!
//! Runs the two sequential provider calls, extracts the six tagged sections
//! from the raw responses and recombines them into one canonical document.
//!
//! Splitting into two calls works around per-call output-length limits.
//! Phase 2 receives the full phase-1 output as context, so the calls are
//! strictly sequential. A missing section is a soft failure (logged,
//! recorded as empty content); every other failure aborts the run.

use std::sync::Arc;

use tracing::{info, warn};

use chronos_llm::{create_provider, LlmProvider};

use crate::models::analysis::AnalysisRequest;
use crate::models::settings::AppConfig;
use crate::services::analysis::prompts::{build_phase_one_prompt, build_phase_two_prompt};
use crate::services::analysis::sections::{combine, extract_section, SectionId, SectionSet};
use crate::utils::error::{AppError, AppResult};

/// Run the full analysis against the active settings.
///
/// Fails with a configuration error before any network call when the active
/// provider has no API key.
pub async fn run_analysis(config: &AppConfig, request: &AnalysisRequest) -> AppResult<String> {
    let provider_config = config.provider_config().map_err(|e| AppError::Provider {
        provider: config.provider.clone(),
        source: e,
    })?;

    if config
        .active_api_key()
        .map(str::is_empty)
        .unwrap_or(true)
    {
        return Err(AppError::config(format!(
            "No API key configured for provider '{}'. Set one in Settings before running an analysis.",
            config.provider
        )));
    }

    let provider = create_provider(provider_config);
    run_with_provider(provider, request).await
}

/// Run the two-phase analysis with an already-constructed provider.
pub async fn run_with_provider(
    provider: Arc<dyn LlmProvider>,
    request: &AnalysisRequest,
) -> AppResult<String> {
    let provider_name = provider.name().to_string();

    // Phase 1: charter, backlog, estimation
    let phase_one_prompt =
        build_phase_one_prompt(&request.document_text, &request.additional_notes);
    info!(provider = %provider_name, model = provider.model(), "Running analysis phase 1");
    let phase_one = provider
        .analyze(&phase_one_prompt)
        .await
        .map_err(|e| AppError::Provider {
            provider: provider_name.clone(),
            source: e,
        })?;
    if phase_one.is_empty() {
        return Err(AppError::EmptyPhase {
            provider: provider_name,
            phase: 1,
        });
    }

    // Phase 2: roadmap, methodology, risks - consistent with phase 1
    let phase_two_prompt = build_phase_two_prompt(
        &request.document_text,
        &request.additional_notes,
        phase_one.text(),
    );
    info!(provider = %provider_name, model = provider.model(), "Running analysis phase 2");
    let phase_two = provider
        .analyze(&phase_two_prompt)
        .await
        .map_err(|e| AppError::Provider {
            provider: provider_name.clone(),
            source: e,
        })?;
    if phase_two.is_empty() {
        return Err(AppError::EmptyPhase {
            provider: provider_name,
            phase: 2,
        });
    }

    // Extract the six sections from their phase responses. Absence is a soft
    // failure: the run still completes with that section empty.
    let mut sections = SectionSet::new();
    collect_sections(&mut sections, phase_one.text(), &SectionId::PHASE_ONE, 1);
    collect_sections(&mut sections, phase_two.text(), &SectionId::PHASE_TWO, 2);

    Ok(combine(&sections))
}

fn collect_sections(sections: &mut SectionSet, text: &str, ids: &[SectionId], phase: u8) {
    for &id in ids {
        match extract_section(text, id) {
            Some(content) => sections.set(id, content),
            None => {
                warn!(
                    section = id.as_str(),
                    phase, "Section missing from phase response; recording empty content"
                );
            }
        }
    }
}
