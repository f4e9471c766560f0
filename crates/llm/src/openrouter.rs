//! OpenRouter Provider
//!
//! Implementation of the LlmProvider trait for OpenRouter's
//! OpenAI-compatible chat completions endpoint.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use super::provider::{missing_api_key_error, parse_http_error, LlmProvider};
use super::types::{LlmError, LlmResponse, LlmResult, ProviderConfig, StopReason, UsageStats};

/// Default OpenRouter API endpoint
const OPENROUTER_API_URL: &str = "https://openrouter.ai/api/v1/chat/completions";

/// OpenRouter provider
pub struct OpenRouterProvider {
    config: ProviderConfig,
    client: reqwest::Client,
}

impl OpenRouterProvider {
    /// Create a new OpenRouter provider with the given configuration
    pub fn new(config: ProviderConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Get the API base URL
    fn base_url(&self) -> &str {
        self.config.base_url.as_deref().unwrap_or(OPENROUTER_API_URL)
    }

    /// Build the request body for the API
    fn build_request_body(&self, prompt: &str) -> serde_json::Value {
        serde_json::json!({
            "model": self.config.model,
            "messages": [
                {"role": "user", "content": prompt}
            ],
            "temperature": self.config.temperature,
            "max_tokens": self.config.max_tokens,
        })
    }

    /// Parse a response from the chat completions endpoint
    fn parse_response(&self, response: &ChatCompletionResponse) -> LlmResponse {
        let choice = response.choices.first();

        let content = choice.and_then(|c| c.message.content.clone());

        let stop_reason = choice
            .and_then(|c| c.finish_reason.as_deref())
            .map(StopReason::from)
            .unwrap_or(StopReason::EndTurn);

        let usage = response
            .usage
            .as_ref()
            .map(|u| UsageStats {
                input_tokens: u.prompt_tokens,
                output_tokens: u.completion_tokens,
            })
            .unwrap_or_default();

        LlmResponse {
            content,
            stop_reason,
            usage,
            model: response.model.clone(),
        }
    }
}

#[async_trait]
impl LlmProvider for OpenRouterProvider {
    fn name(&self) -> &'static str {
        "openrouter"
    }

    fn model(&self) -> &str {
        &self.config.model
    }

    async fn analyze(&self, prompt: &str) -> LlmResult<LlmResponse> {
        let api_key = self
            .config
            .api_key
            .as_ref()
            .filter(|k| !k.is_empty())
            .ok_or_else(|| missing_api_key_error("openrouter"))?;

        debug!(model = %self.config.model, "Sending analyze request to OpenRouter");

        let body = self.build_request_body(prompt);

        let response = self
            .client
            .post(self.base_url())
            .header("Authorization", format!("Bearer {}", api_key))
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::NetworkError {
                message: e.to_string(),
            })?;

        let status = response.status().as_u16();
        let body_text = response.text().await.map_err(|e| LlmError::NetworkError {
            message: e.to_string(),
        })?;

        if status != 200 {
            return Err(parse_http_error(status, &body_text, "openrouter"));
        }

        let parsed: ChatCompletionResponse =
            serde_json::from_str(&body_text).map_err(|e| LlmError::ParseError {
                message: format!("Failed to parse response: {}", e),
            })?;

        Ok(self.parse_response(&parsed))
    }

    async fn health_check(&self) -> LlmResult<()> {
        let api_key = self
            .config
            .api_key
            .as_ref()
            .filter(|k| !k.is_empty())
            .ok_or_else(|| missing_api_key_error("openrouter"))?;

        // Minimal request to verify the API key
        let body = serde_json::json!({
            "model": self.config.model,
            "max_tokens": 1,
            "messages": [{"role": "user", "content": "Hi"}]
        });

        let response = self
            .client
            .post(self.base_url())
            .header("Authorization", format!("Bearer {}", api_key))
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::NetworkError {
                message: e.to_string(),
            })?;

        let status = response.status().as_u16();
        if status == 200 {
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(parse_http_error(status, &body, "openrouter"))
        }
    }

    fn config(&self) -> &ProviderConfig {
        &self.config
    }
}

/// Chat completions response format (OpenAI-compatible)
#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
    model: String,
    usage: Option<ResponseUsage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ResponseUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
}
