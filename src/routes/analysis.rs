//! Analysis Routes
//!
//! The analysis page and the run-analysis handler.

use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use serde::Deserialize;
use tracing::{error, info};

use crate::models::analysis::{AnalysisRequest, DocumentRecord};
use crate::services::analysis;
use crate::services::analysis::sections::extract_sections;
use crate::services::markdown::format_markdown;
use crate::state::AppState;
use crate::utils::error::AppResult;
use crate::views;

/// GET /analyze/{id} - the analysis page for one document.
///
/// When an analysis result exists, every section is run through the
/// Markdown formatter for display.
pub async fn show_analysis(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Html<String>> {
    let document = state.documents().get(&id)?;
    Ok(Html(render_analysis(&state, &document, None)?))
}

/// Form body for a run-analysis request
#[derive(Debug, Deserialize)]
pub struct RunAnalysisForm {
    #[serde(default)]
    pub additional_info: String,
}

/// POST /analyze/{id} - run the two-phase pipeline for a document.
///
/// On success the combined document is persisted and the client is
/// redirected back to the analysis page; on failure the page is re-rendered
/// with the single user-facing error message and nothing is persisted.
pub async fn run_analysis(
    State(state): State<AppState>,
    Path(id): Path<String>,
    axum::Form(form): axum::Form<RunAnalysisForm>,
) -> AppResult<Response> {
    let document = state.documents().get(&id)?;
    let config = state.get_config().await;

    let request = AnalysisRequest {
        document_text: document.text.clone(),
        additional_notes: form.additional_info,
    };

    match analysis::run_analysis(&config, &request).await {
        Ok(combined) => {
            let record = state.results().save(&document.id, &combined)?;
            info!(
                document_id = %document.id,
                result_id = %record.id,
                "Analysis completed and persisted"
            );
            Ok(Redirect::to(&format!("/analyze/{}", document.id)).into_response())
        }
        Err(e) => {
            error!(document_id = %document.id, "Analysis failed: {}", e);
            let html = render_analysis(&state, &document, Some(&e.user_message()))?;
            Ok(Html(html).into_response())
        }
    }
}

/// Render the analysis page, formatting the latest result when one exists
fn render_analysis(
    state: &AppState,
    document: &DocumentRecord,
    error: Option<&str>,
) -> AppResult<String> {
    let sections = state
        .results()
        .latest_for_document(&document.id)?
        .map(|record| formatted_sections(&record.result));
    Ok(views::analysis_page(document, sections.as_deref(), error))
}

/// Extract all six sections from a combined document and format each as HTML
pub fn formatted_sections(combined: &str) -> Vec<(String, String)> {
    extract_sections(combined)
        .iter()
        .map(|(id, content)| (id.title().to_string(), format_markdown(content)))
        .collect()
}
