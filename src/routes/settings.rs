//! Settings Routes
//!
//! The settings form, the full-replacement update handler and the provider
//! health probe.

use axum::extract::State;
use axum::response::Html;
use axum::{Form, Json};
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use chronos_llm::{create_provider, mask_key};

use crate::models::settings::SettingsUpdate;
use crate::state::AppState;
use crate::utils::error::{AppError, AppResult};
use crate::views;

/// GET /settings - the settings form
pub async fn show_settings(State(state): State<AppState>) -> Html<String> {
    Html(views::settings_page(&state.get_config().await, None))
}

/// Form body for a settings update. Empty fields are treated as omitted so
/// built-in defaults apply.
#[derive(Debug, Deserialize, Default)]
pub struct SettingsForm {
    pub provider: Option<String>,
    pub anthropic_api_key: Option<String>,
    pub anthropic_model: Option<String>,
    pub openai_api_key: Option<String>,
    pub openai_model: Option<String>,
    pub openrouter_api_key: Option<String>,
    pub openrouter_model: Option<String>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl SettingsForm {
    /// Convert the form into a full-replacement settings update
    pub fn into_update(self) -> SettingsUpdate {
        SettingsUpdate {
            provider: non_empty(self.provider),
            anthropic_api_key: non_empty(self.anthropic_api_key),
            anthropic_model: non_empty(self.anthropic_model),
            openai_api_key: non_empty(self.openai_api_key),
            openai_model: non_empty(self.openai_model),
            openrouter_api_key: non_empty(self.openrouter_api_key),
            openrouter_model: non_empty(self.openrouter_model),
        }
    }
}

/// POST /settings - apply a full-replacement settings update and persist it
pub async fn update_settings(
    State(state): State<AppState>,
    Form(form): Form<SettingsForm>,
) -> AppResult<Html<String>> {
    let config = state.update_config(form.into_update()).await?;
    info!(
        provider = %config.provider,
        api_key = %mask_key(config.active_api_key().unwrap_or("")),
        "Settings updated"
    );
    Ok(Html(views::settings_page(&config, Some("Settings saved"))))
}

/// POST /settings/health - probe the active provider with a minimal request
pub async fn check_provider_health(
    State(state): State<AppState>,
) -> AppResult<Json<serde_json::Value>> {
    let config = state.get_config().await;
    let provider_config = config.provider_config().map_err(|e| AppError::Provider {
        provider: config.provider.clone(),
        source: e,
    })?;

    let provider = create_provider(provider_config);
    match provider.health_check().await {
        Ok(()) => Ok(Json(json!({
            "ok": true,
            "provider": provider.name(),
            "model": provider.model(),
        }))),
        Err(e) => Ok(Json(json!({
            "ok": false,
            "provider": provider.name(),
            "error": e.to_string(),
        }))),
    }
}
