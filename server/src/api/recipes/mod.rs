pub mod create;
pub mod delete;
pub mod generate;
pub mod get;
pub mod list;
pub mod update;

use std::collections::HashMap;

use axum::routing::{get, post};
use axum::Router;
use diesel::prelude::*;
use serde::Deserialize;
use utoipa::{OpenApi, ToSchema};
use uuid::Uuid;

use tureen_core::{IngredientRecord, ResolvedLine};

use crate::models::IngredientRow;
use crate::schema::ingredients;
use crate::SharedState;

/// Returns the router for /api/recipes endpoints (mounted at /api/recipes)
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/", get(list::list_recipes).post(create::create_recipe))
        .route("/generate", post(generate::generate_recipe))
        .route(
            "/{id}",
            get(get::get_recipe)
                .put(update::update_recipe)
                .delete(delete::delete_recipe),
        )
}

#[derive(OpenApi)]
#[openapi(
    paths(
        list::list_recipes,
        create::create_recipe,
        get::get_recipe,
        update::update_recipe,
        delete::delete_recipe,
        generate::generate_recipe,
    ),
    components(schemas(
        RecipeLineRequest,
        RecipeStepRequest,
        list::ListRecipesResponse,
        list::RecipeSummary,
        create::CreateRecipeRequest,
        create::CreateRecipeResponse,
        get::RecipeResponse,
        get::RecipeLine,
        get::RecipeStep,
        update::UpdateRecipeRequest,
        update::UpdateRecipeResponse,
        generate::GenerateRecipeRequest,
        tureen_core::ai::RecipeDraft,
    ))
)]
pub struct ApiDoc;

/// One ingredient line as submitted by a client. The id must reference an
/// existing catalog entry; the unit is free-form and drives scaling on its
/// own (only "g" and "ml" are treated as per-100 bases).
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct RecipeLineRequest {
    pub ingredient_id: Uuid,
    pub quantity: f64,
    pub unit: String,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct RecipeStepRequest {
    pub instruction: String,
    pub notes: Option<String>,
}

pub(crate) enum LineError {
    InvalidQuantity(usize),
    MissingIngredient(Uuid),
    Storage(String),
}

/// Load the catalog records behind a set of submitted lines and pair each
/// line with its record, preserving submission order. Duplicate ids are
/// fine; any unknown id fails the whole batch.
pub(crate) fn load_lines(
    conn: &mut PgConnection,
    lines: &[RecipeLineRequest],
) -> Result<Vec<ResolvedLine>, LineError> {
    for (index, line) in lines.iter().enumerate() {
        if !line.quantity.is_finite() || line.quantity < 0.0 {
            return Err(LineError::InvalidQuantity(index));
        }
    }

    let ids: Vec<Uuid> = lines.iter().map(|line| line.ingredient_id).collect();

    let rows: Vec<IngredientRow> = ingredients::table
        .filter(ingredients::id.eq_any(&ids))
        .select(IngredientRow::as_select())
        .load(conn)
        .map_err(|err| LineError::Storage(err.to_string()))?;

    let mut by_id: HashMap<Uuid, IngredientRecord> = HashMap::with_capacity(rows.len());
    for row in rows {
        let record = row
            .into_record()
            .map_err(|err| LineError::Storage(err.to_string()))?;
        by_id.insert(record.id, record);
    }

    lines
        .iter()
        .map(|line| {
            let record = by_id
                .get(&line.ingredient_id)
                .cloned()
                .ok_or(LineError::MissingIngredient(line.ingredient_id))?;
            Ok(ResolvedLine {
                record,
                quantity: line.quantity,
                unit: line.unit.clone(),
            })
        })
        .collect()
}
