//! Core domain types shared by the resolver, the aggregator and the server.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Measurement unit an ingredient's nutrient values are expressed against.
///
/// For `Gram` and `Milliliter` the nutrient fields on [`IngredientRecord`]
/// are per 100 units; for `Piece` they are per single piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum MeasurementUnit {
    #[serde(rename = "g")]
    Gram,
    #[serde(rename = "ml")]
    Milliliter,
    #[serde(rename = "piece")]
    Piece,
}

impl MeasurementUnit {
    pub const ALL: &'static [MeasurementUnit] = &[
        MeasurementUnit::Gram,
        MeasurementUnit::Milliliter,
        MeasurementUnit::Piece,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MeasurementUnit::Gram => "g",
            MeasurementUnit::Milliliter => "ml",
            MeasurementUnit::Piece => "piece",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "g" => Some(MeasurementUnit::Gram),
            "ml" => Some(MeasurementUnit::Milliliter),
            "piece" => Some(MeasurementUnit::Piece),
            _ => None,
        }
    }
}

/// A canonical catalog entry with per-100-unit (or per-piece) nutrition values.
///
/// Records are immutable once created; the resolver only ever reads them or
/// adds new ones.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct IngredientRecord {
    pub id: Uuid,
    pub name: String,
    pub calories: f64,
    pub protein: f64,
    pub carbohydrates: f64,
    pub fats: f64,
    pub unit: MeasurementUnit,
    pub category: String,
}

/// Fields for creating a new catalog entry (everything except the id).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct NewIngredient {
    pub name: String,
    pub calories: f64,
    pub protein: f64,
    pub carbohydrates: f64,
    pub fats: f64,
    pub unit: MeasurementUnit,
    pub category: String,
}

impl NewIngredient {
    /// Generic conservative estimates for an ingredient we know nothing about.
    ///
    /// The name is stored unchanged so the placeholder is exactly matchable
    /// on the next lookup.
    pub fn placeholder(name: &str) -> Self {
        Self {
            name: name.to_string(),
            calories: 50.0,
            protein: 5.0,
            carbohydrates: 10.0,
            fats: 1.0,
            unit: MeasurementUnit::Gram,
            category: "Unknown".to_string(),
        }
    }
}

/// A free-text ingredient line awaiting resolution (user-typed or
/// LLM-generated).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct IngredientRef {
    pub name: String,
    pub quantity: f64,
    pub unit: String,
}

/// A resolved recipe line: a catalog record plus the caller's quantity and
/// unit string.
///
/// The unit string is kept verbatim from the caller and is never reconciled
/// with the record's declared unit; aggregation classifies it on its own.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ResolvedLine {
    pub record: IngredientRecord,
    pub quantity: f64,
    pub unit: String,
}

/// Whole-recipe nutrition totals.
///
/// Exactly these four field names are the output contract; callers persist
/// them verbatim.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct NutritionTotals {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}
