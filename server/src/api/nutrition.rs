use axum::routing::post;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

use tureen_core::{recipe_totals, NutritionTotals};

use crate::api::recipes::create::line_error_response;
use crate::api::recipes::{load_lines, RecipeLineRequest};
use crate::api::ErrorResponse;
use crate::get_conn;
use crate::SharedState;

/// Returns the router for /api/nutrition endpoints (mounted at /api/nutrition)
pub fn router() -> Router<SharedState> {
    Router::new().route("/", post(calculate_nutrition))
}

#[derive(OpenApi)]
#[openapi(
    paths(calculate_nutrition),
    components(schemas(CalculateNutritionRequest, NutritionResponse))
)]
pub struct ApiDoc;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CalculateNutritionRequest {
    pub ingredients: Vec<RecipeLineRequest>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct NutritionResponse {
    pub totals: NutritionTotals,
}

#[utoipa::path(
    post,
    path = "/api/nutrition",
    tag = "nutrition",
    request_body = CalculateNutritionRequest,
    responses(
        (status = 200, description = "Aggregated nutrition for the given lines", body = NutritionResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 404, description = "Unknown ingredient id", body = ErrorResponse),
        (status = 500, description = "Catalog unavailable", body = ErrorResponse)
    )
)]
pub async fn calculate_nutrition(
    State(state): State<SharedState>,
    Json(request): Json<CalculateNutritionRequest>,
) -> impl IntoResponse {
    let mut conn = get_conn!(state.pool);

    let lines = match load_lines(&mut conn, &request.ingredients) {
        Ok(lines) => lines,
        Err(err) => return line_error_response(err),
    };

    let totals = recipe_totals(&lines);

    (StatusCode::OK, Json(NutritionResponse { totals })).into_response()
}
