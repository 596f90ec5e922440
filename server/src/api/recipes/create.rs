use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use tureen_core::{recipe_totals, NutritionTotals};

use crate::api::recipes::{load_lines, LineError, RecipeLineRequest, RecipeStepRequest};
use crate::api::ErrorResponse;
use crate::get_conn;
use crate::models::{NewRecipeIngredientRow, NewRecipeRow, NewRecipeStepRow};
use crate::schema::{recipe_ingredients, recipe_steps, recipes};
use crate::SharedState;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateRecipeRequest {
    pub title: String,
    pub description: Option<String>,
    #[serde(default = "default_servings")]
    pub servings: i32,
    pub ingredients: Vec<RecipeLineRequest>,
    #[serde(default)]
    pub steps: Vec<RecipeStepRequest>,
}

fn default_servings() -> i32 {
    1
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CreateRecipeResponse {
    pub id: Uuid,
    pub totals: NutritionTotals,
}

#[utoipa::path(
    post,
    path = "/api/recipes",
    tag = "recipes",
    request_body = CreateRecipeRequest,
    responses(
        (status = 201, description = "Recipe created", body = CreateRecipeResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 404, description = "Unknown ingredient id", body = ErrorResponse),
        (status = 409, description = "Recipe title already exists", body = ErrorResponse),
        (status = 500, description = "Storage unavailable", body = ErrorResponse)
    )
)]
pub async fn create_recipe(
    State(state): State<SharedState>,
    Json(request): Json<CreateRecipeRequest>,
) -> impl IntoResponse {
    if request.title.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Title cannot be empty".to_string(),
            }),
        )
            .into_response();
    }
    if request.servings < 1 {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Servings must be at least 1".to_string(),
            }),
        )
            .into_response();
    }

    let mut conn = get_conn!(state.pool);

    let lines = match load_lines(&mut conn, &request.ingredients) {
        Ok(lines) => lines,
        Err(err) => return line_error_response(err),
    };

    let totals = recipe_totals(&lines);

    // Recipe row, steps and ingredient links land together or not at all.
    let result: Result<Uuid, DieselError> = conn.transaction(|conn| {
        let recipe_id: Uuid = diesel::insert_into(recipes::table)
            .values(NewRecipeRow {
                title: &request.title,
                description: request.description.as_deref(),
                servings: request.servings,
                total_calories: totals.calories,
                total_protein: totals.protein,
                total_carbs: totals.carbs,
                total_fat: totals.fat,
            })
            .returning(recipes::id)
            .get_result(conn)?;

        write_steps(conn, recipe_id, &request.steps)?;
        write_lines(conn, recipe_id, &request.ingredients)?;

        Ok(recipe_id)
    });

    match result {
        Ok(id) => (
            StatusCode::CREATED,
            Json(CreateRecipeResponse { id, totals }),
        )
            .into_response(),
        Err(DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _)) => (
            StatusCode::CONFLICT,
            Json(ErrorResponse {
                error: format!("Recipe {:?} already exists", request.title),
            }),
        )
            .into_response(),
        Err(err) => {
            tracing::error!(error = %err, "failed to create recipe");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to create recipe".to_string(),
                }),
            )
                .into_response()
        }
    }
}

pub(crate) fn write_steps(
    conn: &mut PgConnection,
    recipe_id: Uuid,
    steps: &[RecipeStepRequest],
) -> Result<(), DieselError> {
    let rows: Vec<NewRecipeStepRow> = steps
        .iter()
        .enumerate()
        .map(|(index, step)| NewRecipeStepRow {
            recipe_id,
            step_order: index as i32 + 1,
            instruction: &step.instruction,
            notes: step.notes.as_deref(),
        })
        .collect();

    diesel::insert_into(recipe_steps::table)
        .values(&rows)
        .execute(conn)?;
    Ok(())
}

pub(crate) fn write_lines(
    conn: &mut PgConnection,
    recipe_id: Uuid,
    lines: &[RecipeLineRequest],
) -> Result<(), DieselError> {
    let rows: Vec<NewRecipeIngredientRow> = lines
        .iter()
        .enumerate()
        .map(|(index, line)| NewRecipeIngredientRow {
            recipe_id,
            ingredient_id: line.ingredient_id,
            line_order: index as i32 + 1,
            quantity: line.quantity,
            unit: &line.unit,
        })
        .collect();

    diesel::insert_into(recipe_ingredients::table)
        .values(&rows)
        .execute(conn)?;
    Ok(())
}

pub(crate) fn line_error_response(err: LineError) -> axum::response::Response {
    match err {
        LineError::InvalidQuantity(index) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: format!("Ingredient line {index} has an invalid quantity"),
            }),
        )
            .into_response(),
        LineError::MissingIngredient(id) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("Ingredient {id} not found"),
            }),
        )
            .into_response(),
        LineError::Storage(message) => {
            tracing::error!(error = %message, "failed to load ingredient lines");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Catalog unavailable".to_string(),
                }),
            )
                .into_response()
        }
    }
}
