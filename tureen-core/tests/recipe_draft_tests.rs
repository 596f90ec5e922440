//! End-to-end tests for the AI draft flow: fake LLM -> ingredient
//! resolution -> nutrition aggregation, all against an in-memory catalog.

use tureen_core::ai::{draft_from_prompt, generate_recipe};
use tureen_core::llm::FakeProvider;
use tureen_core::{
    GenerateError, InMemoryCatalog, IngredientCatalog, MeasurementUnit, NewIngredient,
};

fn seeded_catalog() -> InMemoryCatalog {
    InMemoryCatalog::with_records([
        NewIngredient {
            name: "Chicken Breast".to_string(),
            calories: 165.0,
            protein: 31.0,
            carbohydrates: 0.0,
            fats: 3.6,
            unit: MeasurementUnit::Gram,
            category: "Protein".to_string(),
        },
        NewIngredient {
            name: "Broccoli".to_string(),
            calories: 34.0,
            protein: 2.8,
            carbohydrates: 7.0,
            fats: 0.4,
            unit: MeasurementUnit::Gram,
            category: "Vegetable".to_string(),
        },
        NewIngredient {
            name: "Milk (Whole)".to_string(),
            calories: 61.0,
            protein: 3.2,
            carbohydrates: 4.8,
            fats: 3.3,
            unit: MeasurementUnit::Milliliter,
            category: "Dairy".to_string(),
        },
    ])
    .unwrap()
}

#[tokio::test]
async fn test_draft_resolves_known_ingredients_and_totals() {
    let provider = FakeProvider::with_recipe_response();
    let catalog = seeded_catalog();

    let draft = draft_from_prompt(&provider, &catalog, "something with chicken")
        .await
        .unwrap();

    assert_eq!(draft.title, "Grilled Chicken Plate");
    assert_eq!(draft.servings, 2);
    assert_eq!(draft.ingredients.len(), 3);

    // Every generated name hit the seeded catalog; no placeholders created.
    assert_eq!(catalog.len(), 3);
    assert_eq!(draft.ingredients[0].name, "Chicken Breast");
    assert_eq!(draft.ingredients[1].name, "Broccoli");
    assert_eq!(draft.ingredients[2].name, "Milk (Whole)");

    // 300g chicken + 200g broccoli + 250ml milk.
    let expected_calories = 165.0 * 3.0 + 34.0 * 2.0 + 61.0 * 2.5;
    assert!((draft.totals.calories - expected_calories).abs() < 1e-9);
}

#[tokio::test]
async fn test_draft_synthesizes_placeholders_for_novel_names() {
    let response = r#"{
        "title": "Mystery Stew",
        "servings": 4,
        "ingredients": [
            {"name": "Chicken Breast", "quantity": 200, "unit": "g"},
            {"name": "Glorp Root", "quantity": 100, "unit": "g"}
        ],
        "steps": [{"order": 1, "instruction": "Simmer everything.", "notes": null}]
    }"#;
    let provider = FakeProvider::new().with_default_response(response);
    let catalog = seeded_catalog();

    let draft = draft_from_prompt(&provider, &catalog, "surprise me")
        .await
        .unwrap();

    assert_eq!(draft.ingredients.len(), 2);
    assert_eq!(draft.ingredients[1].name, "Glorp Root");
    assert_eq!(draft.ingredients[1].calories, 50.0);

    // The placeholder is durable and exactly matchable afterwards.
    let stored = catalog.find_by_exact_name("Glorp Root").unwrap().unwrap();
    assert_eq!(stored.id, draft.ingredients[1].ingredient_id);
    assert_eq!(stored.category, "Unknown");

    // 200g chicken (330) + 100g placeholder (50).
    assert!((draft.totals.calories - 380.0).abs() < 1e-9);
}

#[tokio::test]
async fn test_draft_fuzzy_matches_near_misses() {
    let response = r#"{
        "title": "Chicken Bowl",
        "ingredients": [{"name": "chicken breasts", "quantity": 150, "unit": "g"}]
    }"#;
    let provider = FakeProvider::new().with_default_response(response);
    let catalog = seeded_catalog();

    let draft = draft_from_prompt(&provider, &catalog, "chicken bowl")
        .await
        .unwrap();

    assert_eq!(draft.ingredients[0].name, "Chicken Breast");
    assert_eq!(catalog.len(), 3, "fuzzy hit must not create a placeholder");
}

#[tokio::test]
async fn test_unparseable_response_is_a_parse_error() {
    let provider = FakeProvider::new().with_default_response("Sorry, I only do poems.");
    let catalog = seeded_catalog();

    let err = draft_from_prompt(&provider, &catalog, "anything")
        .await
        .unwrap_err();
    assert!(matches!(err, GenerateError::Parse(_)));
    assert_eq!(catalog.len(), 3, "failed generation must not touch the catalog");
}

#[tokio::test]
async fn test_generate_recipe_parses_fenced_response() {
    let fenced = format!(
        "Here you go:\n```json\n{}\n```",
        r#"{"title": "Fenced", "ingredients": []}"#
    );
    let provider = FakeProvider::new().with_default_response(&fenced);

    let recipe = generate_recipe(&provider, "whatever").await.unwrap();
    assert_eq!(recipe.title, "Fenced");
    assert!(recipe.ingredients.is_empty());
}
