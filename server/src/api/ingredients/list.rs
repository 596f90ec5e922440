use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use utoipa::ToSchema;

use tureen_core::{IngredientCatalog, IngredientRecord};

use crate::api::ErrorResponse;
use crate::catalog::DieselCatalog;
use crate::SharedState;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ListIngredientsResponse {
    pub ingredients: Vec<IngredientRecord>,
}

#[utoipa::path(
    get,
    path = "/api/ingredients",
    tag = "ingredients",
    responses(
        (status = 200, description = "Full ingredient catalog", body = ListIngredientsResponse),
        (status = 500, description = "Catalog unavailable", body = ErrorResponse)
    )
)]
pub async fn list_ingredients(State(state): State<SharedState>) -> impl IntoResponse {
    let catalog = DieselCatalog::new(state.pool.clone());

    match catalog.list_all() {
        Ok(ingredients) => {
            (StatusCode::OK, Json(ListIngredientsResponse { ingredients })).into_response()
        }
        Err(err) => {
            tracing::error!(error = %err, "failed to list ingredients");
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
