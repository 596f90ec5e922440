use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use tureen_core::{recipe_totals, NutritionTotals};

use crate::api::recipes::create::{line_error_response, write_lines, write_steps};
use crate::api::recipes::{load_lines, RecipeLineRequest, RecipeStepRequest};
use crate::api::ErrorResponse;
use crate::get_conn;
use crate::models::RecipeRow;
use crate::schema::{recipe_ingredients, recipe_steps, recipes};
use crate::SharedState;

/// Partial update; absent fields keep their stored values. Replacing the
/// ingredient list recomputes the persisted totals.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateRecipeRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub servings: Option<i32>,
    pub ingredients: Option<Vec<RecipeLineRequest>>,
    pub steps: Option<Vec<RecipeStepRequest>>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UpdateRecipeResponse {
    pub id: Uuid,
    pub totals: NutritionTotals,
}

#[utoipa::path(
    put,
    path = "/api/recipes/{id}",
    tag = "recipes",
    params(
        ("id" = Uuid, Path, description = "Recipe ID")
    ),
    request_body = UpdateRecipeRequest,
    responses(
        (status = 200, description = "Recipe updated", body = UpdateRecipeResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 404, description = "Recipe or ingredient not found", body = ErrorResponse),
        (status = 409, description = "Recipe title already exists", body = ErrorResponse),
        (status = 500, description = "Storage unavailable", body = ErrorResponse)
    )
)]
pub async fn update_recipe(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateRecipeRequest>,
) -> impl IntoResponse {
    if let Some(ref title) = request.title {
        if title.trim().is_empty() {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "Title cannot be empty".to_string(),
                }),
            )
                .into_response();
        }
    }
    if let Some(servings) = request.servings {
        if servings < 1 {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "Servings must be at least 1".to_string(),
                }),
            )
                .into_response();
        }
    }

    let mut conn = get_conn!(state.pool);

    let existing: RecipeRow = match recipes::table
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

    // Recompute totals only when the line set changes.
    let new_totals = match request.ingredients.as_deref() {
        Some(lines) => match load_lines(&mut conn, lines) {
            Ok(resolved) => Some(recipe_totals(&resolved)),
            Err(err) => return line_error_response(err),
        },
        None => None,
    };

    let totals = new_totals.unwrap_or(NutritionTotals {
        calories: existing.total_calories,
        protein: existing.total_protein,
        carbs: existing.total_carbs,
        fat: existing.total_fat,
    });

    let result: Result<(), DieselError> = conn.transaction(|conn| {
        diesel::update(recipes::table.find(id))
            .set((
                recipes::title.eq(request.title.as_deref().unwrap_or(&existing.title)),
                recipes::description
                    .eq(request.description.as_deref().or(existing.description.as_deref())),
                recipes::servings.eq(request.servings.unwrap_or(existing.servings)),
                recipes::total_calories.eq(totals.calories),
                recipes::total_protein.eq(totals.protein),
                recipes::total_carbs.eq(totals.carbs),
                recipes::total_fat.eq(totals.fat),
                recipes::updated_at.eq(diesel::dsl::now),
            ))
            .execute(conn)?;

        if let Some(ref lines) = request.ingredients {
            diesel::delete(
                recipe_ingredients::table.filter(recipe_ingredients::recipe_id.eq(id)),
            )
            .execute(conn)?;
            write_lines(conn, id, lines)?;
        }

        if let Some(ref steps) = request.steps {
            diesel::delete(recipe_steps::table.filter(recipe_steps::recipe_id.eq(id)))
                .execute(conn)?;
            write_steps(conn, id, steps)?;
        }

        Ok(())
    });

    match result {
        Ok(()) => (StatusCode::OK, Json(UpdateRecipeResponse { id, totals })).into_response(),
        Err(DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _)) => (
            StatusCode::CONFLICT,
            Json(ErrorResponse {
                error: "Recipe title already exists".to_string(),
            }),
        )
            .into_response(),
        Err(err) => {
            tracing::error!(error = %err, "failed to update recipe");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to update recipe".to_string(),
                }),
            )
                .into_response()
        }
    }
}
