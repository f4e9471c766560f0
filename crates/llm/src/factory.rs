//! Provider Factory
//!
//! Maps a provider configuration to a concrete provider implementation.

use std::sync::Arc;

use super::anthropic::AnthropicProvider;
use super::openai::OpenAIProvider;
use super::openrouter::OpenRouterProvider;
use super::provider::LlmProvider;
use super::types::{ProviderConfig, ProviderType};

/// Create an LLM provider from a ProviderConfig.
///
/// Pure construction, no I/O; credential validation happens on first use.
pub fn create_provider(config: ProviderConfig) -> Arc<dyn LlmProvider> {
    match config.provider {
        ProviderType::Anthropic => Arc::new(AnthropicProvider::new(config)),
        ProviderType::OpenAI => Arc::new(OpenAIProvider::new(config)),
        ProviderType::OpenRouter => Arc::new(OpenRouterProvider::new(config)),
    }
}
