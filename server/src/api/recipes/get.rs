use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use tureen_core::NutritionTotals;

use crate::api::ErrorResponse;
use crate::get_conn;
use crate::models::{RecipeIngredientRow, RecipeRow, RecipeStepRow};
use crate::schema::{ingredients, recipe_ingredients, recipe_steps, recipes};
use crate::SharedState;

/// One persisted ingredient line, denormalized with the catalog entry's
/// name and per-unit nutrition so clients need no second lookup.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RecipeLine {
    pub ingredient_id: Uuid,
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    pub calories: f64,
    pub protein: f64,
    pub carbohydrates: f64,
    pub fats: f64,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RecipeStep {
    pub order: i32,
    pub instruction: String,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RecipeResponse {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub servings: i32,
    pub ingredients: Vec<RecipeLine>,
    pub steps: Vec<RecipeStep>,
    pub totals: NutritionTotals,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[utoipa::path(
    get,
    path = "/api/recipes/{id}",
    tag = "recipes",
    params(
        ("id" = Uuid, Path, description = "Recipe ID")
    ),
    responses(
        (status = 200, description = "Recipe details", body = RecipeResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse),
        (status = 500, description = "Storage unavailable", body = ErrorResponse)
    )
)]
pub async fn get_recipe(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    let mut conn = get_conn!(state.pool);

    let recipe: RecipeRow = match recipes::table
        .filter(recipes::id.eq(id))
        .select(RecipeRow::as_select())
        .first(&mut conn)
    {
        Ok(row) => row,
        Err(diesel::NotFound) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: "Recipe not found".to_string(),
                }),
            )
                .into_response()
        }
        Err(err) => {
            tracing::error!(error = %err, "failed to fetch recipe");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to fetch recipe".to_string(),
                }),
            )
                .into_response();
        }
    };

    let lines: Vec<(RecipeIngredientRow, String, f64, f64, f64, f64)> =
        match recipe_ingredients::table
            .inner_join(ingredients::table)
            .filter(recipe_ingredients::recipe_id.eq(id))
            .select((
                RecipeIngredientRow::as_select(),
                ingredients::name,
                ingredients::calories,
                ingredients::protein,
                ingredients::carbohydrates,
                ingredients::fats,
            ))
            .order(recipe_ingredients::line_order.asc())
            .load(&mut conn)
        {
            Ok(rows) => rows,
            Err(err) => {
                tracing::error!(error = %err, "failed to fetch recipe lines");
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse {
                        error: "Failed to fetch recipe".to_string(),
                    }),
                )
                    .into_response();
            }
        };

    let steps: Vec<RecipeStepRow> = match recipe_steps::table
        .filter(recipe_steps::recipe_id.eq(id))
        .select(RecipeStepRow::as_select())
        .order(recipe_steps::step_order.asc())
        .load(&mut conn)
    {
        Ok(rows) => rows,
        Err(err) => {
            tracing::error!(error = %err, "failed to fetch recipe steps");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to fetch recipe".to_string(),
                }),
            )
                .into_response();
        }
    };

    let response = RecipeResponse {
        id: recipe.id,
        title: recipe.title,
        description: recipe.description,
        servings: recipe.servings,
        ingredients: lines
            .into_iter()
            .map(
                |(line, name, calories, protein, carbohydrates, fats)| RecipeLine {
                    ingredient_id: line.ingredient_id,
                    name,
                    quantity: line.quantity,
                    unit: line.unit,
                    calories,
                    protein,
                    carbohydrates,
                    fats,
                },
            )
            .collect(),
        steps: steps
            .into_iter()
            .map(|step| RecipeStep {
                order: step.step_order,
                instruction: step.instruction,
                notes: step.notes,
            })
            .collect(),
        totals: NutritionTotals {
            calories: recipe.total_calories,
            protein: recipe.total_protein,
            carbs: recipe.total_carbs,
            fat: recipe.total_fat,
        },
        created_at: recipe.created_at,
        updated_at: recipe.updated_at,
    };

    (StatusCode::OK, Json(response)).into_response()
}
