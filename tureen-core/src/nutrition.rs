//! Whole-recipe nutrition aggregation.
//!
//! Sums per-line nutrient contributions using a three-bucket scaling
//! heuristic: lines measured in `"g"` or `"ml"` scale against the record's
//! per-100-unit values; everything else (pieces, unrecognized units) is
//! treated as a per-unit quantity. The record's own declared unit is
//! deliberately not consulted; the factor comes from the line's unit string
//! alone.

use crate::types::{NutritionTotals, ResolvedLine};

/// Per-line multiplier applied to the record's nutrient values.
///
/// Only the exact strings `"g"` and `"ml"` trigger the per-100 division; no
/// other spellings are recognized.
fn scale_factor(quantity: f64, unit: &str) -> f64 {
    if unit == "g" || unit == "ml" {
        quantity / 100.0
    } else {
        quantity
    }
}

/// Total calories, protein, carbs and fat across the given lines.
///
/// Accumulates in input order so floating-point rounding is reproducible for
/// identical input. Empty input yields all-zero totals; zero-quantity lines
/// contribute nothing. Quantities are not validated here; that belongs at
/// the request boundary.
pub fn recipe_totals(lines: &[ResolvedLine]) -> NutritionTotals {
    let mut totals = NutritionTotals::default();

    for line in lines {
        let factor = scale_factor(line.quantity, &line.unit);
        totals.calories += line.record.calories * factor;
        totals.protein += line.record.protein * factor;
        totals.carbs += line.record.carbohydrates * factor;
        totals.fat += line.record.fats * factor;
    }

    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{IngredientRecord, MeasurementUnit};
    use uuid::Uuid;

    fn record(
        name: &str,
        calories: f64,
        protein: f64,
        carbohydrates: f64,
        fats: f64,
        unit: MeasurementUnit,
    ) -> IngredientRecord {
        IngredientRecord {
            id: Uuid::new_v4(),
            name: name.to_string(),
            calories,
            protein,
            carbohydrates,
            fats,
            unit,
            category: "Test".to_string(),
        }
    }

    fn line(record: IngredientRecord, quantity: f64, unit: &str) -> ResolvedLine {
        ResolvedLine {
            record,
            quantity,
            unit: unit.to_string(),
        }
    }

    #[test]
    fn test_empty_input_is_all_zero() {
        assert_eq!(recipe_totals(&[]), NutritionTotals::default());
    }

    #[test]
    fn test_gram_lines_scale_per_100() {
        let chicken = record("Chicken Breast", 165.0, 31.0, 0.0, 3.6, MeasurementUnit::Gram);
        let totals = recipe_totals(&[line(chicken, 200.0, "g")]);
        assert_eq!(totals.calories, 330.0);
        assert_eq!(totals.protein, 62.0);
    }

    #[test]
    fn test_piece_lines_are_per_unit() {
        let egg = record("Large Egg", 78.0, 6.3, 0.6, 5.3, MeasurementUnit::Piece);
        let totals = recipe_totals(&[line(egg, 3.0, "piece")]);
        assert_eq!(totals.calories, 234.0);
    }

    #[test]
    fn test_unrecognized_unit_is_per_unit() {
        // "G", "grams", "cup": anything that is not exactly "g" or "ml"
        // skips the per-100 division.
        let chicken = record("Chicken Breast", 165.0, 31.0, 0.0, 3.6, MeasurementUnit::Gram);
        let totals = recipe_totals(&[line(chicken, 2.0, "G")]);
        assert_eq!(totals.calories, 330.0);
    }

    #[test]
    fn test_line_unit_overrides_record_unit() {
        // The record declares per-piece values, but the line says "g": the
        // factor still comes from the line's unit string alone.
        let egg = record("Large Egg", 78.0, 6.3, 0.6, 5.3, MeasurementUnit::Piece);
        let totals = recipe_totals(&[line(egg, 100.0, "g")]);
        assert_eq!(totals.calories, 78.0);
    }

    #[test]
    fn test_mixed_line_aggregation() {
        let lines = vec![
            line(
                record("Chicken Breast", 165.0, 31.0, 0.0, 3.6, MeasurementUnit::Gram),
                150.0,
                "g",
            ),
            line(
                record("Broccoli", 34.0, 2.8, 7.0, 0.4, MeasurementUnit::Gram),
                100.0,
                "g",
            ),
            line(
                record("Large Egg", 78.0, 6.3, 0.6, 5.3, MeasurementUnit::Piece),
                2.0,
                "piece",
            ),
            line(
                record("Milk (Whole)", 61.0, 3.2, 4.8, 3.3, MeasurementUnit::Milliliter),
                200.0,
                "ml",
            ),
        ];

        let totals = recipe_totals(&lines);
        assert!((totals.calories - 559.5).abs() / 559.5 < 0.01, "calories were {}", totals.calories);
        assert!((totals.protein - 68.3).abs() / 68.3 < 0.01, "protein was {}", totals.protein);
    }

    #[test]
    fn test_zero_quantity_contributes_nothing() {
        let butter = record("Butter", 717.0, 0.9, 0.1, 81.0, MeasurementUnit::Gram);
        for unit in ["g", "ml", "piece", "cup"] {
            let totals = recipe_totals(&[line(butter.clone(), 0.0, unit)]);
            assert_eq!(totals, NutritionTotals::default());
        }
    }

    #[test]
    fn test_negative_quantity_propagates() {
        let chicken = record("Chicken Breast", 165.0, 31.0, 0.0, 3.6, MeasurementUnit::Gram);
        let totals = recipe_totals(&[line(chicken, -100.0, "g")]);
        assert_eq!(totals.calories, -165.0);
    }

    #[test]
    fn test_accumulation_is_in_input_order() {
        let a = record("A", 0.1, 0.0, 0.0, 0.0, MeasurementUnit::Gram);
        let b = record("B", 0.2, 0.0, 0.0, 0.0, MeasurementUnit::Gram);
        let forward = recipe_totals(&[line(a.clone(), 100.0, "g"), line(b.clone(), 100.0, "g")]);
        let repeat = recipe_totals(&[line(a, 100.0, "g"), line(b, 100.0, "g")]);
        // Identical input order gives bit-identical results.
        assert_eq!(forward.calories.to_bits(), repeat.calories.to_bits());
    }
}
