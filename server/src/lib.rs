pub mod api;
pub mod catalog;
pub mod db;
pub mod models;
pub mod schema;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tureen_core::llm::LlmProvider;
use utoipa_swagger_ui::SwaggerUi;

/// Application state shared across all handlers.
pub struct AppState {
    pub pool: db::DbPool,
    pub llm: Arc<dyn LlmProvider>,
}

pub type SharedState = Arc<AppState>;

/// Assemble the full application router.
pub fn app(state: SharedState) -> Router {
    let swagger_ui = SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api::openapi());

    Router::new()
        .nest("/api/ingredients", api::ingredients::router())
        .nest("/api/recipes", api::recipes::router())
        .nest("/api/nutrition", api::nutrition::router())
        .merge(swagger_ui)
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let matched_path = request
                    .extensions()
                    .get::<axum::extract::MatchedPath>()
                    .map(axum::extract::MatchedPath::as_str)
                    .unwrap_or(request.uri().path());

                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    path = %matched_path,
                )
            }),
        )
}
