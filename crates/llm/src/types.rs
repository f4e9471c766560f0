//! LLM Types
//!
//! Core types for LLM provider interactions.

use serde::{Deserialize, Serialize};

/// Supported LLM provider types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderType {
    Anthropic,
    OpenAI,
    OpenRouter,
}

impl std::fmt::Display for ProviderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderType::Anthropic => write!(f, "anthropic"),
            ProviderType::OpenAI => write!(f, "openai"),
            ProviderType::OpenRouter => write!(f, "openrouter"),
        }
    }
}

impl std::str::FromStr for ProviderType {
    type Err = LlmError;

    /// Parse a provider selector string, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "anthropic" => Ok(ProviderType::Anthropic),
            "openai" => Ok(ProviderType::OpenAI),
            "openrouter" => Ok(ProviderType::OpenRouter),
            other => Err(LlmError::UnsupportedProvider {
                name: other.to_string(),
            }),
        }
    }
}

/// Configuration for an LLM provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// The provider type
    pub provider: ProviderType,
    /// API key for the provider
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Base URL override (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Model name to use
    pub model: String,
    /// Maximum tokens to generate
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// Temperature (0.0 - 1.0)
    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

fn default_max_tokens() -> u32 {
    4000
}

fn default_temperature() -> f32 {
    0.7
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            provider: ProviderType::Anthropic,
            api_key: None,
            base_url: None,
            model: "claude-3-5-sonnet-20240620".to_string(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
        }
    }
}

/// Mask an API key for log output.
///
/// Keeps the first and last four characters; anything shorter than eight
/// characters renders as a placeholder.
pub fn mask_key(api_key: &str) -> String {
    if api_key.len() < 8 {
        return "<empty_or_short>".to_string();
    }
    format!("{}...{}", &api_key[..4], &api_key[api_key.len() - 4..])
}

/// Token usage statistics
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UsageStats {
    /// Number of input/prompt tokens
    pub input_tokens: u32,
    /// Number of output/completion tokens
    pub output_tokens: u32,
}

impl UsageStats {
    /// Total tokens used
    pub fn total_tokens(&self) -> u32 {
        self.input_tokens + self.output_tokens
    }
}

/// Stop reason for the response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// Natural end of response
    EndTurn,
    /// Hit max tokens limit
    MaxTokens,
    /// Stopped at a stop sequence
    StopSequence,
    /// Other/unknown reason
    Other(String),
}

impl From<&str> for StopReason {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "end_turn" | "stop" => StopReason::EndTurn,
            "max_tokens" | "length" => StopReason::MaxTokens,
            "stop_sequence" => StopReason::StopSequence,
            other => StopReason::Other(other.to_string()),
        }
    }
}

/// Response from an LLM provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmResponse {
    /// Text content of the response
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Why the response ended
    pub stop_reason: StopReason,
    /// Token usage statistics
    pub usage: UsageStats,
    /// The model that generated the response
    pub model: String,
}

impl LlmResponse {
    /// The text completion, or an empty string when none was returned.
    pub fn text(&self) -> &str {
        self.content.as_deref().unwrap_or("")
    }

    /// Check if the response carries no usable text.
    pub fn is_empty(&self) -> bool {
        self.text().trim().is_empty()
    }
}

/// Error types for LLM operations
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LlmError {
    /// Authentication failed (invalid API key)
    AuthenticationFailed { message: String },
    /// Rate limit exceeded
    RateLimited {
        message: String,
        retry_after: Option<u32>,
    },
    /// Model not found or not available
    ModelNotFound { model: String },
    /// Invalid request (bad parameters)
    InvalidRequest { message: String },
    /// Server error from the provider
    ServerError {
        message: String,
        status: Option<u16>,
    },
    /// Network/connection error
    NetworkError { message: String },
    /// Response parsing error
    ParseError { message: String },
    /// Provider selector does not match a known adapter
    UnsupportedProvider { name: String },
    /// Other error
    Other { message: String },
}

impl std::fmt::Display for LlmError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LlmError::AuthenticationFailed { message } => {
                write!(f, "Authentication failed: {}", message)
            }
            LlmError::RateLimited { message, .. } => {
                write!(f, "Rate limited: {}", message)
            }
            LlmError::ModelNotFound { model } => {
                write!(f, "Model not found: {}", model)
            }
            LlmError::InvalidRequest { message } => {
                write!(f, "Invalid request: {}", message)
            }
            LlmError::ServerError { message, status } => {
                if let Some(s) = status {
                    write!(f, "Server error ({}): {}", s, message)
                } else {
                    write!(f, "Server error: {}", message)
                }
            }
            LlmError::NetworkError { message } => {
                write!(f, "Network error: {}", message)
            }
            LlmError::ParseError { message } => {
                write!(f, "Parse error: {}", message)
            }
            LlmError::UnsupportedProvider { name } => {
                write!(f, "Unsupported provider: {}", name)
            }
            LlmError::Other { message } => {
                write!(f, "Error: {}", message)
            }
        }
    }
}

impl std::error::Error for LlmError {}

/// Result type for LLM operations
pub type LlmResult<T> = Result<T, LlmError>;
