//! Error Handling
//!
//! Unified error types for the application.
//! Uses thiserror for ergonomic error definitions.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use chronos_llm::LlmError;
use thiserror::Error;

/// Application-wide error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Not found errors
    #[error("Not found: {0}")]
    NotFound(String),

    /// Document intake errors (upload validation, PDF extraction)
    #[error("Document error: {0}")]
    Document(String),

    /// A provider call or provider construction failed
    #[error("{provider} provider error: {source}")]
    Provider {
        provider: String,
        #[source]
        source: LlmError,
    },

    /// A pipeline phase returned an empty response
    #[error("Empty response from {provider} during analysis phase {phase}")]
    EmptyPhase { provider: String, phase: u8 },

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for application errors
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Create a config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a not found error
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create a document error
    pub fn document(msg: impl Into<String>) -> Self {
        Self::Document(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// One human-readable message for a failed analysis run.
    ///
    /// Authentication failures get a distinguished message; every other
    /// provider failure names the provider and carries the underlying text.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Provider { provider, source } => match source {
                LlmError::AuthenticationFailed { .. } => format!(
                    "Authentication with the {} provider failed. Check the configured API key in Settings.",
                    provider
                ),
                LlmError::UnsupportedProvider { name } => format!(
                    "Unsupported provider '{}'. Choose anthropic, openai or openrouter in Settings.",
                    name
                ),
                other => format!("Analysis with the {} provider failed: {}", provider, other),
            },
            AppError::EmptyPhase { provider, phase } => format!(
                "The {} provider returned an empty response during phase {} of the analysis.",
                provider, phase
            ),
            AppError::Config(msg) => msg.clone(),
            other => other.to_string(),
        }
    }

    /// HTTP status code for this error when it escapes a handler.
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Config(_) | AppError::Validation(_) | AppError::Document(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Provider { .. } | AppError::EmptyPhase { .. } => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let page = crate::views::error_page(status.as_u16(), &self.user_message());
        (status, Html(page)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AppError::config("no API key set");
        assert_eq!(err.to_string(), "Configuration error: no API key set");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let app_err: AppError = io_err.into();
        assert!(matches!(app_err, AppError::Io(_)));
    }

    #[test]
    fn test_user_message_authentication() {
        let err = AppError::Provider {
            provider: "anthropic".to_string(),
            source: LlmError::AuthenticationFailed {
                message: "401".to_string(),
            },
        };
        let msg = err.user_message();
        assert!(msg.contains("anthropic"));
        assert!(msg.contains("API key"));
    }

    #[test]
    fn test_user_message_generic_provider_failure() {
        let err = AppError::Provider {
            provider: "openrouter".to_string(),
            source: LlmError::ServerError {
                message: "upstream busy".to_string(),
                status: Some(503),
            },
        };
        let msg = err.user_message();
        assert!(msg.contains("openrouter"));
        assert!(msg.contains("upstream busy"));
    }

    #[test]
    fn test_user_message_empty_phase() {
        let err = AppError::EmptyPhase {
            provider: "openai".to_string(),
            phase: 2,
        };
        let msg = err.user_message();
        assert!(msg.contains("openai"));
        assert!(msg.contains("phase 2"));
    }
}
