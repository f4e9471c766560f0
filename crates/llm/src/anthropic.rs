//! Anthropic Claude Provider
//!
//! Implementation of the LlmProvider trait for Anthropic's Messages API.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use super::provider::{missing_api_key_error, parse_http_error, LlmProvider};
use super::types::{LlmError, LlmResponse, LlmResult, ProviderConfig, StopReason, UsageStats};

/// Default Anthropic API endpoint
const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";

/// Current API version
const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Anthropic Claude provider
pub struct AnthropicProvider {
    config: ProviderConfig,
    client: reqwest::Client,
}

impl AnthropicProvider {
    /// Create a new Anthropic provider with the given configuration
    pub fn new(config: ProviderConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Get the API base URL
    fn base_url(&self) -> &str {
        self.config.base_url.as_deref().unwrap_or(ANTHROPIC_API_URL)
    }

    /// Build the request body for the API
    fn build_request_body(&self, prompt: &str) -> serde_json::Value {
        serde_json::json!({
            "model": self.config.model,
            "max_tokens": self.config.max_tokens,
            "temperature": self.config.temperature,
            "messages": [
                {"role": "user", "content": prompt}
            ],
        })
    }

    /// Parse a response from the Messages API
    fn parse_response(&self, response: &AnthropicResponse) -> LlmResponse {
        let content = response
            .content
            .iter()
            .find(|block| block.kind == "text")
            .map(|block| block.text.clone());

        let stop_reason = response
            .stop_reason
            .as_deref()
            .map(StopReason::from)
            .unwrap_or(StopReason::EndTurn);

        LlmResponse {
            content,
            stop_reason,
            usage: UsageStats {
                input_tokens: response.usage.input_tokens,
                output_tokens: response.usage.output_tokens,
            },
            model: response.model.clone(),
        }
    }
}

#[async_trait]
impl LlmProvider for AnthropicProvider {
    fn name(&self) -> &'static str {
        "anthropic"
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
            .ok_or_else(|| missing_api_key_error("anthropic"))?;

        debug!(model = %self.config.model, "Sending analyze request to Anthropic");

        let body = self.build_request_body(prompt);

        let response = self
            .client
            .post(self.base_url())
            .header("x-api-key", api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
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
            return Err(parse_http_error(status, &body_text, "anthropic"));
        }

        let parsed: AnthropicResponse =
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
            .ok_or_else(|| missing_api_key_error("anthropic"))?;

        // Minimal request to verify the API key
        let body = serde_json::json!({
            "model": self.config.model,
            "max_tokens": 1,
            "messages": [{"role": "user", "content": "Hi"}]
        });

        let response = self
            .client
            .post(self.base_url())
            .header("x-api-key", api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
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
        } else if status == 401 {
            Err(LlmError::AuthenticationFailed {
                message: "Invalid API key".to_string(),
            })
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(parse_http_error(status, &body, "anthropic"))
        }
    }

    fn config(&self) -> &ProviderConfig {
        &self.config
    }
}

/// Messages API response format
#[derive(Debug, Deserialize)]
struct AnthropicResponse {
    content: Vec<ContentBlock>,
    model: String,
    stop_reason: Option<String>,
    usage: ResponseUsage,
}

/// One content block; only "text" blocks carry completion text.
#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: String,
}

#[derive(Debug, Deserialize)]
struct ResponseUsage {
    input_tokens: u32,
    output_tokens: u32,
}
