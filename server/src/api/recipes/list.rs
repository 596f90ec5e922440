use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use tureen_core::NutritionTotals;

use crate::api::ErrorResponse;
use crate::get_conn;
use crate::models::RecipeRow;
use crate::schema::recipes;
use crate::SharedState;

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct ListParams {
    /// Optional case-insensitive substring filter on title and description.
    pub q: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RecipeSummary {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub servings: i32,
    pub totals: NutritionTotals,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ListRecipesResponse {
    pub recipes: Vec<RecipeSummary>,
}

#[utoipa::path(
    get,
    path = "/api/recipes",
    tag = "recipes",
    params(ListParams),
    responses(
        (status = 200, description = "All recipes, newest first", body = ListRecipesResponse),
        (status = 500, description = "Storage unavailable", body = ErrorResponse)
    )
)]
pub async fn list_recipes(
    State(state): State<SharedState>,
    Query(params): Query<ListParams>,
) -> impl IntoResponse {
    let mut conn = get_conn!(state.pool);

    let mut query = recipes::table
        .select(RecipeRow::as_select())
        .order(recipes::created_at.desc())
        .into_boxed();

    if let Some(q) = params.q.as_deref().filter(|q| !q.trim().is_empty()) {
        let escaped = q
            .replace('\\', "\\\\")
            .replace('%', "\\%")
            .replace('_', "\\_");
        let pattern = format!("%{escaped}%");
        query = query.filter(
            recipes::title
                .ilike(pattern.clone())
                .or(recipes::description.ilike(pattern)),
        );
    }

    let rows: Vec<RecipeRow> = match query.load(&mut conn) {
        Ok(rows) => rows,
        Err(err) => {
            tracing::error!(error = %err, "failed to list recipes");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to list recipes".to_string(),
                }),
            )
                .into_response();
        }
    };

    let recipes = rows
        .into_iter()
        .map(|row| RecipeSummary {
            id: row.id,
            title: row.title,
            description: row.description,
            servings: row.servings,
            totals: NutritionTotals {
                calories: row.total_calories,
                protein: row.total_protein,
                carbs: row.total_carbs,
                fat: row.total_fat,
            },
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
        .collect();

    (StatusCode::OK, Json(ListRecipesResponse { recipes })).into_response()
}
