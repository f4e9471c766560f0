//! Settings Integration Tests
//!
//! Settings persistence, the full-replacement update semantics, and the
//! derived provider configuration.

use chronos_web::storage::ConfigService;
use chronos_web::{AppConfig, AppState, SettingsUpdate};

use chronos_llm::ProviderType;

fn temp_state() -> (tempfile::TempDir, AppState) {
    let temp = tempfile::tempdir().unwrap();
    let state = AppState::with_paths(
        temp.path().join("settings.json"),
        temp.path().join("uploads"),
        temp.path().join("results"),
    )
    .unwrap();
    (temp, state)
}

#[tokio::test]
async fn test_defaults_on_first_start() {
    let (_temp, state) = temp_state();
    let config = state.get_config().await;

    assert_eq!(config.provider, "anthropic");
    assert_eq!(config.anthropic_model, "claude-3-5-sonnet-20240620");
    assert_eq!(config.openai_model, "gpt-4-turbo-preview");
    assert_eq!(config.openrouter_model, "anthropic/claude-3-opus-20240229");
    assert!(config.anthropic_api_key.is_empty());
}

#[tokio::test]
async fn test_update_survives_restart() {
    let temp = tempfile::tempdir().unwrap();
    let settings_path = temp.path().join("settings.json");

    {
        let state = AppState::with_paths(
            settings_path.clone(),
            temp.path().join("uploads"),
            temp.path().join("results"),
        )
        .unwrap();
        state
            .update_config(SettingsUpdate {
                provider: Some("openrouter".to_string()),
                openrouter_api_key: Some("or-key-12345".to_string()),
                openrouter_model: Some("meta-llama/llama-3-70b".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
    }

    // A fresh service sees the persisted values
    let reloaded = ConfigService::with_path(settings_path).unwrap();
    let config = reloaded.get_config();
    assert_eq!(config.provider, "openrouter");
    assert_eq!(config.openrouter_api_key, "or-key-12345");
    assert_eq!(config.openrouter_model, "meta-llama/llama-3-70b");
}

#[tokio::test]
async fn test_full_replacement_restores_defaults_for_omitted_fields() {
    let (_temp, state) = temp_state();

    state
        .update_config(SettingsUpdate {
            provider: Some("openai".to_string()),
            openai_api_key: Some("sk-abc".to_string()),
            openai_model: Some("gpt-4o".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    // Second update omits the OpenAI fields entirely
    let config = state
        .update_config(SettingsUpdate {
            provider: Some("anthropic".to_string()),
            anthropic_api_key: Some("sk-ant-xyz".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(config.provider, "anthropic");
    assert_eq!(config.anthropic_api_key, "sk-ant-xyz");
    // Omitted fields fell back to built-in defaults, not prior values
    assert_eq!(config.openai_api_key, "");
    assert_eq!(config.openai_model, "gpt-4-turbo-preview");
}

#[test]
fn test_provider_config_derivation() {
    let config = AppConfig {
        provider: "openai".to_string(),
        openai_api_key: "sk-live".to_string(),
        openai_model: "gpt-4o".to_string(),
        ..Default::default()
    };

    let pc = config.provider_config().unwrap();
    assert_eq!(pc.provider, ProviderType::OpenAI);
    assert_eq!(pc.api_key.as_deref(), Some("sk-live"));
    assert_eq!(pc.model, "gpt-4o");
    assert_eq!(pc.max_tokens, 4000);
    assert!((pc.temperature - 0.7).abs() < f32::EPSILON);
}

#[test]
fn test_invalid_selector_rejected_by_validation() {
    let config = AppConfig {
        provider: "gemini".to_string(),
        ..Default::default()
    };
    assert!(config.validate().is_err());
}
