//! Seeds the ingredient catalog with a pantry of common ingredients.
//!
//! Idempotent: names that already exist are skipped, so it is safe to run
//! against a live database at any time.

use anyhow::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use tureen_core::{CatalogError, IngredientCatalog, MeasurementUnit, NewIngredient};
use tureen_server::catalog::DieselCatalog;
use tureen_server::db;

use tureen_core::MeasurementUnit::{Gram as G, Milliliter as Ml, Piece};

type SeedRow = (&'static str, f64, f64, f64, f64, MeasurementUnit, &'static str);

// (name, calories, protein, carbohydrates, fats, unit, category)
// Nutrition per 100 g / 100 ml, or per piece.
const SEED_INGREDIENTS: &[SeedRow] = &[
    // Proteins
    ("Chicken Breast", 165.0, 31.0, 0.0, 3.6, G, "Protein"),
    ("Chicken Thigh", 209.0, 26.0, 0.0, 10.9, G, "Protein"),
    ("Lean Ground Beef", 250.0, 26.0, 0.0, 15.0, G, "Protein"),
    ("Ribeye Steak", 291.0, 24.0, 0.0, 22.0, G, "Protein"),
    ("Pork Tenderloin", 143.0, 26.0, 0.0, 3.5, G, "Protein"),
    ("Bacon", 541.0, 37.0, 1.4, 42.0, G, "Protein"),
    ("Salmon Fillet", 208.0, 20.0, 0.0, 13.0, G, "Protein"),
    ("Cod Fillet", 82.0, 18.0, 0.0, 0.7, G, "Protein"),
    ("Shrimp", 99.0, 24.0, 0.2, 0.3, G, "Protein"),
    ("Tuna (Canned)", 116.0, 26.0, 0.0, 0.8, G, "Protein"),
    ("Tofu (Firm)", 144.0, 15.7, 3.9, 8.1, G, "Protein"),
    ("Tempeh", 192.0, 20.0, 7.6, 10.8, G, "Protein"),
    ("Large Egg", 78.0, 6.3, 0.6, 5.3, Piece, "Protein"),
    ("Lentils (Cooked)", 116.0, 9.0, 20.0, 0.4, G, "Protein"),
    ("Chickpeas (Canned)", 164.0, 8.9, 27.0, 2.6, G, "Protein"),
    ("Black Beans (Canned)", 132.0, 8.9, 23.7, 0.5, G, "Protein"),
    ("Ground Turkey", 149.0, 24.0, 0.0, 5.9, G, "Protein"),
    // Vegetables
    ("Broccoli", 34.0, 2.8, 7.0, 0.4, G, "Vegetable"),
    ("Spinach", 23.0, 2.9, 3.6, 0.4, G, "Vegetable"),
    ("Carrot", 41.0, 0.9, 10.0, 0.2, G, "Vegetable"),
    ("Bell Pepper (Red)", 31.0, 1.0, 6.0, 0.3, G, "Vegetable"),
    ("Zucchini", 17.0, 1.2, 3.1, 0.3, G, "Vegetable"),
    ("Sweet Potato", 86.0, 1.6, 20.0, 0.1, G, "Vegetable"),
    ("Potato (Russet)", 77.0, 2.0, 17.0, 0.1, G, "Vegetable"),
    ("Kale", 49.0, 4.3, 8.8, 0.9, G, "Vegetable"),
    ("Cucumber", 15.0, 0.7, 3.6, 0.1, G, "Vegetable"),
    ("Tomato", 18.0, 0.9, 3.9, 0.2, G, "Vegetable"),
    ("Onion (Yellow)", 40.0, 1.1, 9.3, 0.1, G, "Vegetable"),
    ("Garlic", 149.0, 6.4, 33.0, 0.5, G, "Vegetable"),
    ("Cauliflower", 25.0, 1.9, 5.0, 0.3, G, "Vegetable"),
    ("Asparagus", 20.0, 2.2, 3.9, 0.1, G, "Vegetable"),
    ("Green Beans", 31.0, 1.8, 7.0, 0.1, G, "Vegetable"),
    ("Mushroom (Button)", 22.0, 3.1, 3.3, 0.3, G, "Vegetable"),
    ("Canned Tomatoes (Diced)", 32.0, 1.0, 7.0, 0.0, G, "Vegetable"),
    ("Tomato Paste", 82.0, 4.0, 19.0, 0.0, G, "Vegetable"),
    // Grains and baking
    ("Quinoa (Cooked)", 120.0, 4.4, 21.3, 1.9, G, "Grain"),
    ("Brown Rice (Cooked)", 111.0, 2.6, 23.0, 0.9, G, "Grain"),
    ("White Rice (Basmati)", 130.0, 2.7, 28.0, 0.3, G, "Grain"),
    ("Oats (Rolled)", 389.0, 16.9, 66.0, 6.9, G, "Grain"),
    ("Whole Wheat Bread", 247.0, 13.0, 41.0, 3.4, G, "Grain"),
    ("White Bread", 265.0, 9.0, 49.0, 3.2, G, "Grain"),
    ("Pasta (Wheat)", 131.0, 5.0, 25.0, 1.1, G, "Grain"),
    ("Flour (All-Purpose)", 364.0, 10.0, 76.0, 1.0, G, "Baking"),
    ("Almond Flour", 590.0, 21.0, 19.0, 53.0, G, "Baking"),
    ("Sugar (White)", 387.0, 0.0, 100.0, 0.0, G, "Baking"),
    ("Baking Powder", 53.0, 0.0, 28.0, 0.0, G, "Baking"),
    ("Vanilla Extract", 288.0, 0.1, 13.0, 0.1, Ml, "Baking"),
    // Dairy and alternatives
    ("Milk (Whole)", 61.0, 3.2, 4.8, 3.3, Ml, "Dairy"),
    ("Milk (Skim)", 34.0, 3.4, 5.0, 0.1, Ml, "Dairy"),
    ("Almond Milk (Unsweetened)", 15.0, 0.6, 0.6, 1.2, Ml, "Dairy"),
    ("Butter", 717.0, 0.9, 0.1, 81.0, G, "Dairy"),
    ("Cheddar Cheese", 403.0, 25.0, 1.3, 33.0, G, "Dairy"),
    ("Mozzarella Cheese", 300.0, 22.0, 2.2, 22.0, G, "Dairy"),
    ("Parmesan Cheese", 431.0, 38.0, 4.1, 29.0, G, "Dairy"),
    ("Heavy Cream", 340.0, 2.8, 2.7, 36.0, Ml, "Dairy"),
    ("Greek Yogurt (Plain)", 59.0, 10.0, 3.6, 0.4, G, "Dairy"),
    // Fruits
    ("Avocado", 160.0, 2.0, 9.0, 15.0, G, "Fruit"),
    ("Apple (Gala)", 52.0, 0.3, 14.0, 0.2, G, "Fruit"),
    ("Banana", 89.0, 1.1, 23.0, 0.3, G, "Fruit"),
    ("Blueberries", 57.0, 0.7, 14.0, 0.3, G, "Fruit"),
    ("Strawberries", 32.0, 0.7, 7.7, 0.3, G, "Fruit"),
    ("Lemon Juice", 22.0, 0.4, 7.0, 0.2, Ml, "Fruit"),
    ("Lime Juice", 25.0, 0.4, 8.4, 0.1, Ml, "Fruit"),
    ("Orange", 47.0, 0.9, 12.0, 0.1, G, "Fruit"),
    // Oils, condiments, sweeteners
    ("Olive Oil (Extra Virgin)", 884.0, 0.0, 0.0, 100.0, Ml, "Oils"),
    ("Coconut Oil", 862.0, 0.0, 0.0, 100.0, Ml, "Oils"),
    ("Sesame Oil", 884.0, 0.0, 0.0, 100.0, Ml, "Oils"),
    ("Peanut Butter (Natural)", 588.0, 25.0, 20.0, 50.0, G, "Oils"),
    ("Mayonnaise", 680.0, 1.0, 0.6, 75.0, G, "Condiment"),
    ("Dijon Mustard", 66.0, 4.4, 5.0, 4.4, G, "Condiment"),
    ("Honey", 304.0, 0.3, 82.0, 0.0, G, "Seasoning"),
    ("Maple Syrup", 260.0, 0.0, 67.0, 0.1, Ml, "Seasoning"),
    ("Chicken Broth", 5.0, 1.0, 1.0, 0.0, Ml, "Condiment"),
    ("Vegetable Broth", 5.0, 0.0, 1.0, 0.0, Ml, "Condiment"),
    // Nuts and seeds
    ("Almonds", 579.0, 21.0, 22.0, 50.0, G, "Nuts"),
    ("Walnuts", 654.0, 15.0, 14.0, 65.0, G, "Nuts"),
    ("Cashews", 553.0, 18.0, 30.0, 44.0, G, "Nuts"),
    ("Chia Seeds", 486.0, 17.0, 42.0, 31.0, G, "Nuts"),
    // Seasonings
    ("Salt (Sea)", 0.0, 0.0, 0.0, 0.0, G, "Seasoning"),
    ("Black Pepper", 251.0, 10.0, 64.0, 3.3, G, "Seasoning"),
    ("Cinnamon", 247.0, 4.0, 81.0, 1.2, G, "Seasoning"),
    ("Cumin (Ground)", 375.0, 18.0, 44.0, 22.0, G, "Seasoning"),
    ("Paprika (Smoked)", 282.0, 14.0, 54.0, 13.0, G, "Seasoning"),
    ("Ginger (Fresh)", 80.0, 1.8, 18.0, 0.8, G, "Seasoning"),
    ("Soy Sauce (Low Sodium)", 53.0, 8.0, 4.9, 0.6, Ml, "Seasoning"),
    ("Fish Sauce", 35.0, 5.0, 3.7, 0.0, Ml, "Seasoning"),
    ("Rice Vinegar", 18.0, 0.0, 0.2, 0.0, Ml, "Seasoning"),
    ("Balsamic Vinegar", 88.0, 0.0, 17.0, 0.0, Ml, "Seasoning"),
    ("Dried Oregano", 265.0, 9.0, 69.0, 4.0, G, "Seasoning"),
    ("Chili Powder", 282.0, 13.0, 50.0, 14.0, G, "Seasoning"),
];

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let database_url =
        std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let pool = db::create_pool(&database_url);
    let catalog = DieselCatalog::new(pool);

    let mut created = 0usize;
    let mut skipped = 0usize;

    for &(name, calories, protein, carbohydrates, fats, unit, category) in SEED_INGREDIENTS {
        let result = catalog.create(NewIngredient {
            name: name.to_string(),
            calories,
            protein,
            carbohydrates,
            fats,
            unit,
            category: category.to_string(),
        });

        match result {
            Ok(_) => created += 1,
            Err(CatalogError::DuplicateName(_)) => skipped += 1,
            Err(err) => return Err(err).with_context(|| format!("failed to seed {name:?}")),
        }
    }

    tracing::info!(created, skipped, "ingredient seed complete");
    Ok(())
}
