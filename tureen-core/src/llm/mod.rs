//! LLM provider abstraction for AI recipe generation.
//!
//! Trait-based abstraction over language-model backends (local Ollama for
//! real use, a deterministic fake for tests). The rest of the core only sees
//! plain text in, plain text out.

mod fake;
mod ollama;

pub use fake::FakeProvider;
pub use ollama::OllamaProvider;

use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

/// Error type for LLM operations.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("API returned error: {status} - {message}")]
    ApiError { status: u16, message: String },

    #[error("Provider not configured: {0}")]
    NotConfigured(String),
}

/// Trait for LLM providers.
///
/// Implementations should be stateless and thread-safe. The provider makes
/// the API call and returns the model's raw text response.
#[async_trait]
pub trait LlmProvider: Send + Sync + fmt::Debug {
    /// Send a prompt to the LLM and get a text response.
    async fn complete(&self, prompt: &str) -> Result<String, LlmError>;

    /// Provider name (e.g., "ollama", "fake").
    fn provider_name(&self) -> &'static str;

    /// Model name (e.g., "mistral").
    fn model_name(&self) -> &str;
}

/// Build a provider from environment variables.
///
/// - `LLM_PROVIDER`: "ollama" | "fake" (default "fake")
/// - `OLLAMA_URL`: base URL of the Ollama server (default http://localhost:11434)
/// - `OLLAMA_MODEL`: model to generate with (default "mistral")
pub fn create_provider_from_env() -> Result<Box<dyn LlmProvider>, LlmError> {
    let provider = std::env::var("LLM_PROVIDER").unwrap_or_else(|_| "fake".to_string());

    match provider.as_str() {
        "fake" => Ok(Box::new(FakeProvider::with_recipe_response())),
        "ollama" => Ok(Box::new(OllamaProvider::from_env())),
        other => Err(LlmError::NotConfigured(format!(
            "Unknown provider: {}",
            other
        ))),
    }
}
