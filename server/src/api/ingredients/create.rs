use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Deserialize;
use utoipa::ToSchema;

use tureen_core::{
    CatalogError, IngredientCatalog, IngredientRecord, MeasurementUnit, NewIngredient,
};

use crate::api::ErrorResponse;
use crate::catalog::DieselCatalog;
use crate::SharedState;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateIngredientRequest {
    pub name: String,
    pub calories: f64,
    pub protein: f64,
    pub carbohydrates: f64,
    pub fats: f64,
    /// One of "g", "ml", "piece".
    pub unit: String,
    pub category: String,
}

#[utoipa::path(
    post,
    path = "/api/ingredients",
    tag = "ingredients",
    request_body = CreateIngredientRequest,
    responses(
        (status = 201, description = "Ingredient created", body = IngredientRecord),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 409, description = "Ingredient name already exists", body = ErrorResponse),
        (status = 500, description = "Catalog unavailable", body = ErrorResponse)
    )
)]
pub async fn create_ingredient(
    State(state): State<SharedState>,
    Json(request): Json<CreateIngredientRequest>,
) -> impl IntoResponse {
    let unit = match validate(&request) {
        Ok(unit) => unit,
        Err(message) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse { error: message }),
            )
                .into_response()
        }
    };

    let catalog = DieselCatalog::new(state.pool.clone());
    let result = catalog.create(NewIngredient {
        name: request.name,
        calories: request.calories,
        protein: request.protein,
        carbohydrates: request.carbohydrates,
        fats: request.fats,
        unit,
        category: request.category,
    });

    match result {
        Ok(record) => (StatusCode::CREATED, Json(record)).into_response(),
        Err(CatalogError::DuplicateName(name)) => (
            StatusCode::CONFLICT,
            Json(ErrorResponse {
                error: format!("Ingredient {name:?} already exists"),
            }),
        )
            .into_response(),
        Err(err) => {
            tracing::error!(error = %err, "failed to create ingredient");
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

fn validate(request: &CreateIngredientRequest) -> Result<MeasurementUnit, String> {
    if request.name.trim().is_empty() {
        return Err("Name cannot be empty".to_string());
    }
    if request.category.trim().is_empty() {
        return Err("Category cannot be empty".to_string());
    }
    for (field, value) in [
        ("calories", request.calories),
        ("protein", request.protein),
        ("carbohydrates", request.carbohydrates),
        ("fats", request.fats),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(format!("{field} must be a non-negative number"));
        }
    }
    MeasurementUnit::from_str(&request.unit).ok_or_else(|| {
        format!(
            "Unit must be one of \"g\", \"ml\", \"piece\", got {:?}",
            request.unit
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> CreateIngredientRequest {
        CreateIngredientRequest {
            name: "Chicken Breast".to_string(),
            calories: 165.0,
            protein: 31.0,
            carbohydrates: 0.0,
            fats: 3.6,
            unit: "g".to_string(),
            category: "Protein".to_string(),
        }
    }

    #[test]
    fn test_validate_accepts_well_formed_request() {
        assert_eq!(validate(&request()), Ok(MeasurementUnit::Gram));
    }

    #[test]
    fn test_validate_rejects_blank_name() {
        let mut req = request();
        req.name = "   ".to_string();
        assert!(validate(&req).is_err());
    }

    #[test]
    fn test_validate_rejects_unknown_unit() {
        let mut req = request();
        req.unit = "cup".to_string();
        let err = validate(&req).unwrap_err();
        assert!(err.contains("cup"));
    }

    #[test]
    fn test_validate_rejects_negative_and_non_finite_nutrients() {
        let mut req = request();
        req.protein = -1.0;
        assert!(validate(&req).is_err());

        let mut req = request();
        req.calories = f64::NAN;
        assert!(validate(&req).is_err());
    }
}
