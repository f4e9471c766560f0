//! Settings Models
//!
//! Application configuration and settings data structures.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use chronos_llm::{LlmError, ProviderConfig, ProviderType};

/// Application configuration stored in settings.json
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Active provider selector: "anthropic", "openai" or "openrouter"
    #[serde(default = "default_provider")]
    pub provider: String,
    #[serde(default)]
    pub anthropic_api_key: String,
    #[serde(default = "default_anthropic_model")]
    pub anthropic_model: String,
    #[serde(default)]
    pub openai_api_key: String,
    #[serde(default = "default_openai_model")]
    pub openai_model: String,
    #[serde(default)]
    pub openrouter_api_key: String,
    #[serde(default = "default_openrouter_model")]
    pub openrouter_model: String,
}

fn default_provider() -> String {
    "anthropic".to_string()
}

fn default_anthropic_model() -> String {
    "claude-3-5-sonnet-20240620".to_string()
}

fn default_openai_model() -> String {
    "gpt-4-turbo-preview".to_string()
}

fn default_openrouter_model() -> String {
    "anthropic/claude-3-opus-20240229".to_string()
}

/// Output-token budget per vendor: Anthropic allows a larger completion
/// than the OpenAI-compatible endpoints.
const ANTHROPIC_MAX_TOKENS: u32 = 8000;
const CHAT_COMPLETIONS_MAX_TOKENS: u32 = 4000;

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            anthropic_api_key: String::new(),
            anthropic_model: default_anthropic_model(),
            openai_api_key: String::new(),
            openai_model: default_openai_model(),
            openrouter_api_key: String::new(),
            openrouter_model: default_openrouter_model(),
        }
    }
}

/// Settings update request.
///
/// Applied as a full replacement: omitted fields fall back to the built-in
/// defaults, not to the previous values.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SettingsUpdate {
    pub provider: Option<String>,
    pub anthropic_api_key: Option<String>,
    pub anthropic_model: Option<String>,
    pub openai_api_key: Option<String>,
    pub openai_model: Option<String>,
    pub openrouter_api_key: Option<String>,
    pub openrouter_model: Option<String>,
}

impl AppConfig {
    /// Apply a full-replacement update, falling back to built-in defaults
    /// for any omitted field.
    pub fn apply_update(&mut self, update: SettingsUpdate) {
        let defaults = AppConfig::default();
        self.provider = update.provider.unwrap_or(defaults.provider);
        self.anthropic_api_key = update
            .anthropic_api_key
            .unwrap_or(defaults.anthropic_api_key);
        self.anthropic_model = update.anthropic_model.unwrap_or(defaults.anthropic_model);
        self.openai_api_key = update.openai_api_key.unwrap_or(defaults.openai_api_key);
        self.openai_model = update.openai_model.unwrap_or(defaults.openai_model);
        self.openrouter_api_key = update
            .openrouter_api_key
            .unwrap_or(defaults.openrouter_api_key);
        self.openrouter_model = update.openrouter_model.unwrap_or(defaults.openrouter_model);
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        ProviderType::from_str(&self.provider).map_err(|e| e.to_string())?;
        Ok(())
    }

    /// The API key configured for the active provider.
    pub fn active_api_key(&self) -> Result<&str, LlmError> {
        Ok(match ProviderType::from_str(&self.provider)? {
            ProviderType::Anthropic => &self.anthropic_api_key,
            ProviderType::OpenAI => &self.openai_api_key,
            ProviderType::OpenRouter => &self.openrouter_api_key,
        })
    }

    /// Build the active ProviderConfig from the settings.
    ///
    /// Fails with `UnsupportedProvider` when the selector is unknown.
    /// Credential presence is checked by the pipeline, not here.
    pub fn provider_config(&self) -> Result<ProviderConfig, LlmError> {
        let provider = ProviderType::from_str(&self.provider)?;
        let (api_key, model, max_tokens) = match provider {
            ProviderType::Anthropic => (
                &self.anthropic_api_key,
                &self.anthropic_model,
                ANTHROPIC_MAX_TOKENS,
            ),
            ProviderType::OpenAI => (
                &self.openai_api_key,
                &self.openai_model,
                CHAT_COMPLETIONS_MAX_TOKENS,
            ),
            ProviderType::OpenRouter => (
                &self.openrouter_api_key,
                &self.openrouter_model,
                CHAT_COMPLETIONS_MAX_TOKENS,
            ),
        };

        Ok(ProviderConfig {
            provider,
            api_key: Some(api_key.clone()),
            base_url: None,
            model: model.clone(),
            max_tokens,
            ..Default::default()
        })
    }
}
