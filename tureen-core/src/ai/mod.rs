//! AI recipe generation.
//!
//! Prompts an LLM for a complete recipe, parses the (frequently messy) JSON
//! out of its response, resolves the generated ingredient names against the
//! catalog, and aggregates nutrition totals to produce a draft the client
//! can submit through the manual creation path.

pub mod prompts;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::IngredientCatalog;
use crate::error::GenerateError;
use crate::llm::LlmProvider;
use crate::nutrition::recipe_totals;
use crate::resolver::IngredientResolver;
use crate::types::{IngredientRef, NutritionTotals};

/// One preparation step as generated by the model.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct GeneratedStep {
    pub order: i32,
    pub instruction: String,
    #[serde(default)]
    pub notes: Option<String>,
}

/// The model's own per-serving nutrition estimate, kept for display only;
/// persisted totals always come from the aggregator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct MacroEstimate {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

/// A recipe as parsed from the LLM response, before ingredient resolution.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct GeneratedRecipe {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_servings")]
    pub servings: i32,
    pub ingredients: Vec<IngredientRef>,
    #[serde(default)]
    pub steps: Vec<GeneratedStep>,
    #[serde(default)]
    pub macros: Option<MacroEstimate>,
}

fn default_servings() -> i32 {
    1
}

/// A draft ingredient line with the resolved record's data flattened in,
/// ready for a client form to submit back through the manual path.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct DraftIngredient {
    pub ingredient_id: Uuid,
    pub name: String,
    pub calories: f64,
    pub protein: f64,
    pub carbohydrates: f64,
    pub fats: f64,
    pub quantity: f64,
    pub unit: String,
}

/// The full AI-generated draft: resolved ingredients plus computed totals.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct RecipeDraft {
    pub title: String,
    pub description: String,
    pub servings: i32,
    pub ingredients: Vec<DraftIngredient>,
    pub steps: Vec<GeneratedStep>,
    pub macros: Option<MacroEstimate>,
    pub totals: NutritionTotals,
}

/// Build the generation prompt for a user request.
pub fn build_prompt(request: &str) -> String {
    format!(
        "{system}\n\nCreate a recipe for: {request}\n\n\
         You MUST respond with ONLY a JSON object, no other text. \
         Follow this exact format:\n\n{example}\n\n\
         Now generate a different recipe based on the request above. \
         Output ONLY valid JSON, nothing else.",
        system = prompts::SYSTEM_PROMPT,
        example = prompts::RECIPE_EXAMPLE,
    )
}

/// Pull a [`GeneratedRecipe`] out of a raw LLM response.
///
/// Models wrap JSON in prose or markdown fences more often than not, so this
/// tries: the whole response, then the first fenced code block, then the
/// outermost brace span.
pub fn extract_json(text: &str) -> Result<GeneratedRecipe, GenerateError> {
    let text = text.trim();

    if let Ok(recipe) = serde_json::from_str(text) {
        return Ok(recipe);
    }

    if let Some(block) = fenced_block(text) {
        if let Ok(recipe) = serde_json::from_str(block.trim()) {
            return Ok(recipe);
        }
    }

    if let Some(span) = brace_span(text) {
        if let Ok(recipe) = serde_json::from_str(span) {
            return Ok(recipe);
        }
    }

    let preview: String = text.chars().take(200).collect();
    Err(GenerateError::Parse(format!(
        "no valid recipe JSON in response (first 200 chars): {preview}"
    )))
}

/// Contents of the first ``` fence, tolerating a "json" language tag.
fn fenced_block(text: &str) -> Option<&str> {
    let start = text.find("```")?;
    let after_fence = &text[start + 3..];
    let after_tag = after_fence.strip_prefix("json").unwrap_or(after_fence);
    let end = after_tag.find("```")?;
    Some(&after_tag[..end])
}

/// Span from the first '{' to the last '}', if any.
fn brace_span(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end <= start {
        return None;
    }
    Some(&text[start..=end])
}

/// Ask the LLM for a recipe and parse its response.
pub async fn generate_recipe(
    provider: &dyn LlmProvider,
    request: &str,
) -> Result<GeneratedRecipe, GenerateError> {
    let prompt = build_prompt(request);
    let response = provider.complete(&prompt).await?;
    tracing::debug!(
        provider = provider.provider_name(),
        response_len = response.len(),
        "received generation response"
    );
    extract_json(&response)
}

/// Full AI path: generate, resolve every ingredient, aggregate totals.
///
/// Novel ingredient names become durable catalog placeholders, so the draft
/// always has a complete, id-referenced ingredient list.
pub async fn draft_from_prompt(
    provider: &dyn LlmProvider,
    catalog: &dyn IngredientCatalog,
    request: &str,
) -> Result<RecipeDraft, GenerateError> {
    let generated = generate_recipe(provider, request).await?;

    let resolver = IngredientResolver::new(catalog);
    let lines = resolver.resolve_batch(&generated.ingredients)?;
    let totals = recipe_totals(&lines);

    let ingredients = lines
        .into_iter()
        .map(|line| DraftIngredient {
            ingredient_id: line.record.id,
            name: line.record.name,
            calories: line.record.calories,
            protein: line.record.protein,
            carbohydrates: line.record.carbohydrates,
            fats: line.record.fats,
            quantity: line.quantity,
            unit: line.unit,
        })
        .collect();

    Ok(RecipeDraft {
        title: generated.title,
        description: generated.description,
        servings: generated.servings,
        ingredients,
        steps: generated.steps,
        macros: generated.macros,
        totals,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"{
        "title": "Toast",
        "ingredients": [{"name": "White Bread", "quantity": 2, "unit": "piece"}]
    }"#;

    #[test]
    fn test_extract_direct_json() {
        let recipe = extract_json(MINIMAL).unwrap();
        assert_eq!(recipe.title, "Toast");
        assert_eq!(recipe.servings, 1, "servings defaults to 1");
        assert!(recipe.steps.is_empty());
    }

    #[test]
    fn test_extract_from_fenced_block() {
        let text = format!("Here is your recipe:\n```json\n{MINIMAL}\n```\nEnjoy!");
        let recipe = extract_json(&text).unwrap();
        assert_eq!(recipe.title, "Toast");
    }

    #[test]
    fn test_extract_from_untagged_fence() {
        let text = format!("```\n{MINIMAL}\n```");
        let recipe = extract_json(&text).unwrap();
        assert_eq!(recipe.title, "Toast");
    }

    #[test]
    fn test_extract_from_surrounding_prose() {
        let text = format!("Sure! {MINIMAL} Let me know if you want changes.");
        let recipe = extract_json(&text).unwrap();
        assert_eq!(recipe.ingredients.len(), 1);
        assert_eq!(recipe.ingredients[0].name, "White Bread");
    }

    #[test]
    fn test_extract_failure() {
        let err = extract_json("I can't help with that.").unwrap_err();
        assert!(matches!(err, GenerateError::Parse(_)));
    }

    #[test]
    fn test_prompt_contains_request_and_format() {
        let prompt = build_prompt("a quick lentil soup");
        assert!(prompt.contains("a quick lentil soup"));
        assert!(prompt.contains("ONLY a JSON object"));
        assert!(prompt.contains("\"ingredients\""));
    }
}
