//! Fake LLM provider for testing.
//!
//! Returns deterministic responses based on prompt substring matching, so
//! tests run without network access or a local model.

use super::{LlmError, LlmProvider};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

/// A canned recipe response covering the common seed ingredients. Useful as
/// a default when no registered pattern matches.
pub const RECIPE_RESPONSE: &str = r#"{
  "title": "Grilled Chicken Plate",
  "description": "Simple grilled chicken with broccoli and a glass of milk.",
  "servings": 2,
  "ingredients": [
    {"name": "Chicken Breast", "quantity": 300, "unit": "g"},
    {"name": "Broccoli", "quantity": 200, "unit": "g"},
    {"name": "Milk (Whole)", "quantity": 250, "unit": "ml"}
  ],
  "steps": [
    {"order": 1, "instruction": "Season the chicken and grill 6-7 minutes per side.", "notes": null},
    {"order": 2, "instruction": "Steam the broccoli until just tender.", "notes": "About 4 minutes."},
    {"order": 3, "instruction": "Plate and serve with a glass of milk.", "notes": null}
  ],
  "macros": {"calories": 450, "protein": 55, "carbs": 20, "fat": 12}
}"#;

/// A fake LLM provider for testing.
///
/// Responses are matched by checking if the prompt contains a registered
/// substring (case-insensitive). If no match is found, returns the default
/// response or an error.
#[derive(Debug, Default)]
pub struct FakeProvider {
    /// Map of prompt substring -> response
    responses: RwLock<HashMap<String, String>>,
    /// Default response if no pattern matches
    default_response: Option<String>,
}

impl FakeProvider {
    /// Create a new FakeProvider with no registered responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// A provider that answers a specific response for prompts containing a
    /// substring.
    pub fn with_response(prompt_contains: &str, response: &str) -> Self {
        let mut provider = Self::new();
        provider.add_response(prompt_contains, response);
        provider
    }

    /// Add a response for prompts containing a specific substring.
    pub fn add_response(&mut self, prompt_contains: &str, response: &str) {
        self.responses
            .write()
            .unwrap()
            .insert(prompt_contains.to_string(), response.to_string());
    }

    /// Set the default response used when no pattern matches.
    pub fn with_default_response(mut self, response: &str) -> Self {
        self.default_response = Some(response.to_string());
        self
    }

    /// A provider that answers every prompt with [`RECIPE_RESPONSE`].
    pub fn with_recipe_response() -> Self {
        Self::new().with_default_response(RECIPE_RESPONSE)
    }
}

#[async_trait]
impl LlmProvider for FakeProvider {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        let responses = self.responses.read().unwrap();

        let prompt_lower = prompt.to_lowercase();
        for (pattern, response) in responses.iter() {
            if prompt_lower.contains(&pattern.to_lowercase()) {
                return Ok(response.clone());
            }
        }

        match &self.default_response {
            Some(response) => Ok(response.clone()),
            None => Err(LlmError::RequestFailed(format!(
                "FakeProvider: no response configured for prompt (first 100 chars): {}",
                prompt.chars().take(100).collect::<String>()
            ))),
        }
    }

    fn provider_name(&self) -> &'static str {
        "fake"
    }

    fn model_name(&self) -> &str {
        "fake-model"
    }
}
