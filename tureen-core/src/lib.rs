pub mod ai;
pub mod catalog;
pub mod error;
pub mod llm;
pub mod nutrition;
pub mod resolver;
pub mod similarity;
pub mod types;

pub use catalog::{InMemoryCatalog, IngredientCatalog};
pub use error::{CatalogError, GenerateError};
pub use nutrition::recipe_totals;
pub use resolver::{IngredientResolver, SIMILARITY_THRESHOLD};
pub use types::{
    IngredientRecord, IngredientRef, MeasurementUnit, NewIngredient, NutritionTotals, ResolvedLine,
};
