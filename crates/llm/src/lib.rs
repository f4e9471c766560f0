//! Chronos LLM
//!
//! Provides a unified interface for interacting with multiple LLM providers:
//! - Anthropic Claude
//! - OpenAI
//! - OpenRouter
//!
//! Also includes the provider factory used by the analysis pipeline.

pub mod anthropic;
pub mod factory;
pub mod openai;
pub mod openrouter;
pub mod provider;
pub mod types;

// Re-export main types
pub use anthropic::AnthropicProvider;
pub use factory::create_provider;
pub use openai::OpenAIProvider;
pub use openrouter::OpenRouterProvider;
pub use provider::LlmProvider;
pub use types::*;
