pub mod ingredients;
pub mod nutrition;
pub mod recipes;

use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

/// Shared error response used by all endpoints
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Generate the complete OpenAPI spec by merging all module specs
pub fn openapi() -> utoipa::openapi::OpenApi {
    #[derive(OpenApi)]
    #[openapi(components(schemas(ErrorResponse)))]
    struct BaseApi;

    let mut spec = BaseApi::openapi();

    let modules: Vec<utoipa::openapi::OpenApi> = vec![
        ingredients::ApiDoc::openapi(),
        recipes::ApiDoc::openapi(),
        nutrition::ApiDoc::openapi(),
    ];

    for module_spec in modules {
        spec.paths.paths.extend(module_spec.paths.paths);

        if let Some(module_components) = module_spec.components {
            if let Some(spec_components) = spec.components.as_mut() {
                spec_components.schemas.extend(module_components.schemas);
            }
        }
    }

    spec
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_covers_all_endpoints() {
        let spec = openapi();

        for path in [
            "/api/ingredients",
            "/api/ingredients/search",
            "/api/recipes",
            "/api/recipes/{id}",
            "/api/recipes/generate",
            "/api/nutrition",
        ] {
            assert!(
                spec.paths.paths.contains_key(path),
                "missing path {path} in OpenAPI spec"
            );
        }
    }

    #[test]
    fn test_openapi_merges_module_schemas() {
        let spec = openapi();
        let components = spec.components.expect("spec should have components");

        for schema in ["ErrorResponse", "CreateIngredientRequest", "RecipeResponse"] {
            assert!(
                components.schemas.contains_key(schema),
                "missing schema {schema}"
            );
        }
    }
}
