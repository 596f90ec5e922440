pub mod create;
pub mod list;
pub mod search;

use crate::SharedState;
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for /api/ingredients endpoints (mounted at /api/ingredients)
pub fn router() -> Router<SharedState> {
    Router::new()
        .route(
            "/",
            get(list::list_ingredients).post(create::create_ingredient),
        )
        .route("/search", get(search::search_ingredients))
}

#[derive(OpenApi)]
#[openapi(
    paths(
        list::list_ingredients,
        create::create_ingredient,
        search::search_ingredients,
    ),
    components(schemas(
        list::ListIngredientsResponse,
        create::CreateIngredientRequest,
        search::SearchIngredientsResponse,
    ))
)]
pub struct ApiDoc;
