use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Deserialize;
use utoipa::ToSchema;

use tureen_core::ai::{draft_from_prompt, RecipeDraft};
use tureen_core::GenerateError;

use crate::api::ErrorResponse;
use crate::catalog::DieselCatalog;
use crate::SharedState;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct GenerateRecipeRequest {
    /// Free-form description of the dish to generate.
    pub prompt: String,
}

#[utoipa::path(
    post,
    path = "/api/recipes/generate",
    tag = "recipes",
    request_body = GenerateRecipeRequest,
    responses(
        (status = 200, description = "Generated recipe draft; not persisted", body = RecipeDraft),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 502, description = "Generation failed", body = ErrorResponse),
        (status = 500, description = "Catalog unavailable", body = ErrorResponse)
    )
)]
pub async fn generate_recipe(
    State(state): State<SharedState>,
    Json(request): Json<GenerateRecipeRequest>,
) -> impl IntoResponse {
    if request.prompt.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Prompt cannot be empty".to_string(),
            }),
        )
            .into_response();
    }

    let catalog = DieselCatalog::new(state.pool.clone());

    match draft_from_prompt(state.llm.as_ref(), &catalog, &request.prompt).await {
        Ok(draft) => (StatusCode::OK, Json(draft)).into_response(),
        Err(GenerateError::Llm(err)) => {
            tracing::error!(error = %err, "LLM request failed");
            (
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse {
                    error: "Recipe generation failed".to_string(),
                }),
            )
                .into_response()
        }
        Err(GenerateError::Parse(message)) => {
            tracing::warn!(error = %message, "unparseable generation response");
            (
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse {
                    error: "Recipe generation returned an unusable response".to_string(),
                }),
            )
                .into_response()
        }
        Err(GenerateError::Catalog(err)) => {
            tracing::error!(error = %err, "catalog failed during draft resolution");
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
