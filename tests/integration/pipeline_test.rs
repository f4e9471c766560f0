//! Pipeline Integration Tests
//!
//! Exercise the two-phase analysis pipeline end to end with a scripted
//! provider, including persistence of the combined document and the
//! rendering-side extraction.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use chronos_llm::{LlmProvider, LlmResponse, LlmResult, ProviderConfig, StopReason, UsageStats};
use chronos_web::models::analysis::AnalysisRequest;
use chronos_web::routes::analysis::formatted_sections;
use chronos_web::services::analysis::sections::{extract_sections, SectionId};
use chronos_web::services::analysis::{run_analysis, run_with_provider};
use chronos_web::storage::ResultStore;
use chronos_web::{AppConfig, AppError};

struct ScriptedProvider {
    config: ProviderConfig,
    responses: Mutex<Vec<String>>,
}

impl ScriptedProvider {
    fn new(responses: Vec<&str>) -> Arc<Self> {
        Arc::new(Self {
            config: ProviderConfig::default(),
            responses: Mutex::new(responses.into_iter().map(String::from).collect()),
        })
    }
}

#[async_trait]
impl LlmProvider for ScriptedProvider {
    fn name(&self) -> &'static str {
        "scripted"
    }

    fn model(&self) -> &str {
        "scripted-model"
    }

    async fn analyze(&self, _prompt: &str) -> LlmResult<LlmResponse> {
        let text = self.responses.lock().unwrap().remove(0);
        Ok(LlmResponse {
            content: Some(text),
            stop_reason: StopReason::EndTurn,
            usage: UsageStats::default(),
            model: "scripted-model".to_string(),
        })
    }

    async fn health_check(&self) -> LlmResult<()> {
        Ok(())
    }

    fn config(&self) -> &ProviderConfig {
        &self.config
    }
}

fn request() -> AnalysisRequest {
    AnalysisRequest {
        document_text: "Build a booking platform".to_string(),
        additional_notes: "React frontend, Rust backend".to_string(),
    }
}

const PHASE_ONE: &str = "Here are the artifacts:\n\
    <project_charter>\n# Project Charter\n\n- **Goal**: bookings\n</project_charter>\n\
    <product_backlog>\n## Epic 1\n- story one\n- story two\n</product_backlog>\n\
    <effort_estimation>\n| US | Days |\n|----|------|\n| 1 | 2 |\n</effort_estimation>";

const PHASE_TWO: &str = "<roadmap>\n# Roadmap\n\nPhase 1 (4 weeks)\n</roadmap>\n\
    <methodology>\n# Methodology\n\nScrum with *two-week* sprints\n</methodology>\n\
    <risk_management>\n# Risks\n\n| ID | Risk |\n|----|------|\n| R1 | Scope |\n</risk_management>";

#[tokio::test]
async fn test_full_run_persist_and_render() {
    let provider = ScriptedProvider::new(vec![PHASE_ONE, PHASE_TWO]);
    let combined = run_with_provider(provider, &request()).await.unwrap();

    // Persist and read back through the result store
    let temp = tempfile::tempdir().unwrap();
    let store = ResultStore::new(temp.path().join("results")).unwrap();
    let record = store.save("11111111-2222-3333-4444-555555555555", &combined).unwrap();
    let loaded = store.get(&record.id).unwrap();
    assert_eq!(loaded.result, combined);

    // All six sections survive the store round trip
    let sections = extract_sections(&loaded.result);
    assert!(sections.get(SectionId::ProjectCharter).contains("# Project Charter"));
    assert!(sections.get(SectionId::RiskManagement).contains("| R1 | Scope |"));

    // The rendering side formats every section as HTML
    let rendered = formatted_sections(&loaded.result);
    assert_eq!(rendered.len(), 6);
    let charter = &rendered[0].1;
    assert!(charter.contains("<h1 id=\"Project Charter\">Project Charter</h1>"));
    assert!(charter.contains("<strong>Goal</strong>"));
    let backlog = &rendered[1].1;
    assert!(backlog.contains("<li>story one</li>"));
    assert_eq!(backlog.matches("<ul>").count(), 1);
    let estimation = &rendered[2].1;
    assert!(estimation.contains("<table class=\"markdown-table\">"));
}

#[tokio::test]
async fn test_partial_phase_response_still_completes() {
    let provider = ScriptedProvider::new(vec![
        "<project_charter>Charter only</project_charter>",
        PHASE_TWO,
    ]);
    let combined = run_with_provider(provider, &request()).await.unwrap();
    let sections = extract_sections(&combined);

    assert_eq!(sections.get(SectionId::ProjectCharter), "Charter only");
    assert_eq!(sections.get(SectionId::ProductBacklog), "");
    assert_eq!(sections.get(SectionId::EffortEstimation), "");
    assert!(!sections.get(SectionId::Roadmap).is_empty());
}

#[tokio::test]
async fn test_missing_credential_never_reaches_provider() {
    // Default settings select anthropic with an empty key
    let config = AppConfig::default();
    let err = run_analysis(&config, &request()).await.unwrap_err();
    assert!(matches!(err, AppError::Config(_)));
    assert!(err.user_message().contains("anthropic"));
}
