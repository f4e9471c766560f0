//! LLM Provider Trait
//!
//! Defines the common interface for all LLM providers.

use async_trait::async_trait;

use super::types::{LlmError, LlmResponse, LlmResult, ProviderConfig};

/// Trait that all LLM providers must implement.
///
/// Provides a unified interface for:
/// - Single-prompt text completions (analyze)
/// - Health checking
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Returns the provider name for identification.
    fn name(&self) -> &'static str;

    /// Returns the current model being used.
    fn model(&self) -> &str;

    /// Send a fully-formed prompt and get the text completion.
    ///
    /// The prompt is forwarded verbatim; no templating happens here.
    /// One outbound network call per invocation, no retries.
    async fn analyze(&self, prompt: &str) -> LlmResult<LlmResponse>;

    /// Check if the provider is healthy and reachable.
    ///
    /// Validates the API key with a minimal request.
    async fn health_check(&self) -> LlmResult<()>;

    /// Get the configuration for this provider.
    fn config(&self) -> &ProviderConfig;
}

/// Helper function to create an error for missing API key
pub fn missing_api_key_error(provider: &str) -> LlmError {
    LlmError::AuthenticationFailed {
        message: format!("API key not configured for {}", provider),
    }
}

/// Helper function to parse HTTP error status codes
pub fn parse_http_error(status: u16, body: &str, provider: &str) -> LlmError {
    match status {
        401 => LlmError::AuthenticationFailed {
            message: format!("{}: Invalid API key", provider),
        },
        403 => LlmError::AuthenticationFailed {
            message: format!("{}: Access denied", provider),
        },
        404 => LlmError::ModelNotFound {
            model: body.to_string(),
        },
        429 => LlmError::RateLimited {
            message: body.to_string(),
            retry_after: None,
        },
        400 => LlmError::InvalidRequest {
            message: body.to_string(),
        },
        500..=599 => LlmError::ServerError {
            message: body.to_string(),
            status: Some(status),
        },
        _ => LlmError::Other {
            message: format!("HTTP {}: {}", status, body),
        },
    }
}
