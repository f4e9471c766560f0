//! OpenAI Provider
//!
//! Implementation of the LlmProvider trait for OpenAI's chat completions API.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use super::provider::{missing_api_key_error, parse_http_error, LlmProvider};
use super::types::{LlmError, LlmResponse, LlmResult, ProviderConfig, StopReason, UsageStats};

/// Default OpenAI API endpoint
const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";

/// OpenAI provider
pub struct OpenAIProvider {
    config: ProviderConfig,
    client: reqwest::Client,
}

impl OpenAIProvider {
    /// Create a new OpenAI provider with the given configuration
    pub fn new(config: ProviderConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Get the API base URL
    fn base_url(&self) -> &str {
        self.config.base_url.as_deref().unwrap_or(OPENAI_API_URL)
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

    /// Parse a response from the chat completions API
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
impl LlmProvider for OpenAIProvider {
    fn name(&self) -> &'static str {
        "openai"
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
            .ok_or_else(|| missing_api_key_error("openai"))?;

        debug!(model = %self.config.model, "Sending analyze request to OpenAI");

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
            return Err(parse_http_error(status, &body_text, "openai"));
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
            .ok_or_else(|| missing_api_key_error("openai"))?;

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
            Err(parse_http_error(status, &body, "openai"))
        }
    }

    fn config(&self) -> &ProviderConfig {
        &self.config
    }
}

/// Chat completions response format
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ProviderType;

    fn test_config() -> ProviderConfig {
        ProviderConfig {
            provider: ProviderType::OpenAI,
            api_key: Some("sk-test".to_string()),
            model: "gpt-4-turbo-preview".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_provider_creation() {
        let provider = OpenAIProvider::new(test_config());
        assert_eq!(provider.name(), "openai");
        assert_eq!(provider.model(), "gpt-4-turbo-preview");
    }

    #[test]
    fn test_request_body_building() {
        let provider = OpenAIProvider::new(test_config());
        let body = provider.build_request_body("Analyze this document");

        assert_eq!(body["model"], "gpt-4-turbo-preview");
        assert_eq!(body["max_tokens"], 4000);
        assert_eq!(body["messages"][0]["content"], "Analyze this document");
    }

    #[test]
    fn test_parse_response() {
        let provider = OpenAIProvider::new(test_config());
        let raw = r#"{
            "choices": [
                {"message": {"content": "Charter text"}, "finish_reason": "stop"}
            ],
            "model": "gpt-4-turbo-preview",
            "usage": {"prompt_tokens": 80, "completion_tokens": 300}
        }"#;
        let parsed: ChatCompletionResponse = serde_json::from_str(raw).unwrap();
        let response = provider.parse_response(&parsed);

        assert_eq!(response.text(), "Charter text");
        assert_eq!(response.stop_reason, StopReason::EndTurn);
        assert_eq!(response.usage.input_tokens, 80);
    }

    #[test]
    fn test_parse_response_no_choices() {
        let provider = OpenAIProvider::new(test_config());
        let raw = r#"{"choices": [], "model": "gpt-4-turbo-preview", "usage": null}"#;
        let parsed: ChatCompletionResponse = serde_json::from_str(raw).unwrap();
        let response = provider.parse_response(&parsed);

        assert!(response.is_empty());
    }

    #[tokio::test]
    async fn test_analyze_without_api_key() {
        let config = ProviderConfig {
            api_key: None,
            ..test_config()
        };
        let provider = OpenAIProvider::new(config);
        let err = provider.analyze("prompt").await.unwrap_err();
        assert!(matches!(err, LlmError::AuthenticationFailed { .. }));
    }
}
