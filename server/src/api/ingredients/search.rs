use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use tureen_core::IngredientRecord;

use crate::api::ErrorResponse;
use crate::get_conn;
use crate::models::IngredientRow;
use crate::schema::ingredients;
use crate::SharedState;

const MAX_RESULTS: i64 = 50;

#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct SearchParams {
    /// Case-insensitive substring to match against ingredient names.
    pub q: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SearchIngredientsResponse {
    pub ingredients: Vec<IngredientRecord>,
}

#[utoipa::path(
    get,
    path = "/api/ingredients/search",
    tag = "ingredients",
    params(SearchParams),
    responses(
        (status = 200, description = "Ingredients whose name contains the query", body = SearchIngredientsResponse),
        (status = 500, description = "Catalog unavailable", body = ErrorResponse)
    )
)]
pub async fn search_ingredients(
    State(state): State<SharedState>,
    Query(params): Query<SearchParams>,
) -> impl IntoResponse {
    let mut conn = get_conn!(state.pool);

    // ILIKE treats % and _ as wildcards; escape them so the query stays a
    // literal substring match.
    let escaped = params
        .q
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");

    let rows: Vec<IngredientRow> = match ingredients::table
        .filter(ingredients::name.ilike(format!("%{escaped}%")))
        .select(IngredientRow::as_select())
        .order((ingredients::created_at.asc(), ingredients::id.asc()))
        .limit(MAX_RESULTS)
        .load(&mut conn)
    {
        Ok(rows) => rows,
        Err(err) => {
            tracing::error!(error = %err, "failed to search ingredients");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Catalog unavailable".to_string(),
                }),
            )
                .into_response();
        }
    };

    match rows
        .into_iter()
        .map(IngredientRow::into_record)
        .collect::<Result<Vec<_>, _>>()
    {
        Ok(ingredients) => {
            (StatusCode::OK, Json(SearchIngredientsResponse { ingredients })).into_response()
        }
        Err(err) => {
            tracing::error!(error = %err, "catalog row failed to convert");
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
