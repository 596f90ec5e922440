//! Prompt text for AI recipe generation.

pub const SYSTEM_PROMPT: &str = "\
You are an experienced chef and certified nutritionist helping users build \
precisely tracked recipes.

Core instructions:
1. Structure recipes in a clean, logical format.
2. Give every ingredient a measurement in g, ml, or pieces so nutrition can \
be tracked precisely.
3. Keep techniques accessible but suggest improvements where they matter.
4. When asked for nutrition estimates, give calories, protein, carbs and fat \
per serving.";

/// One-shot example the model must imitate. Kept to ingredients the seeded
/// catalog knows about so matched drafts look right out of the box.
pub const RECIPE_EXAMPLE: &str = r#"{
  "title": "Grilled Chicken Salad",
  "description": "A healthy Mediterranean-style grilled chicken salad.",
  "servings": 2,
  "ingredients": [
    {"name": "Chicken Breast", "quantity": 300, "unit": "g"},
    {"name": "Olive Oil (Extra Virgin)", "quantity": 15, "unit": "ml"},
    {"name": "Tomato", "quantity": 150, "unit": "g"},
    {"name": "Large Egg", "quantity": 2, "unit": "piece"}
  ],
  "steps": [
    {"order": 1, "instruction": "Season the chicken with olive oil.", "notes": "Rest 10 minutes at room temperature first."},
    {"order": 2, "instruction": "Grill 6-7 minutes per side until cooked through.", "notes": "Internal temperature 74C."},
    {"order": 3, "instruction": "Slice the tomato and egg and plate everything together.", "notes": null}
  ],
  "macros": {
    "calories": 450,
    "protein": 45,
    "carbs": 12,
    "fat": 18
  }
}"#;
