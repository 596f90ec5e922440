use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use tureen_core::{CatalogError, IngredientRecord, MeasurementUnit, NewIngredient};

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::ingredients)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct IngredientRow {
    pub id: Uuid,
    pub name: String,
    pub calories: f64,
    pub protein: f64,
    pub carbohydrates: f64,
    pub fats: f64,
    pub unit: String,
    pub category: String,
    pub created_at: DateTime<Utc>,
}

impl IngredientRow {
    /// Convert a stored row into the core's record type.
    ///
    /// The unit column is CHECK-constrained to the closed set, so a parse
    /// failure here means the row predates the constraint or was written
    /// around it; that is a storage fault, not a resolution miss.
    pub fn into_record(self) -> Result<IngredientRecord, CatalogError> {
        let unit = MeasurementUnit::from_str(&self.unit).ok_or_else(|| {
            CatalogError::InvalidRecord(format!(
                "ingredient {} has unknown unit {:?}",
                self.id, self.unit
            ))
        })?;

        Ok(IngredientRecord {
            id: self.id,
            name: self.name,
            calories: self.calories,
            protein: self.protein,
            carbohydrates: self.carbohydrates,
            fats: self.fats,
            unit,
            category: self.category,
        })
    }
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::ingredients)]
pub struct NewIngredientRow<'a> {
    pub name: &'a str,
    pub calories: f64,
    pub protein: f64,
    pub carbohydrates: f64,
    pub fats: f64,
    pub unit: &'a str,
    pub category: &'a str,
}

impl<'a> NewIngredientRow<'a> {
    pub fn from_fields(fields: &'a NewIngredient) -> Self {
        Self {
            name: &fields.name,
            calories: fields.calories,
            protein: fields.protein,
            carbohydrates: fields.carbohydrates,
            fats: fields.fats,
            unit: fields.unit.as_str(),
            category: &fields.category,
        }
    }
}

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::recipes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct RecipeRow {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub servings: i32,
    pub total_calories: f64,
    pub total_protein: f64,
    pub total_carbs: f64,
    pub total_fat: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::recipes)]
pub struct NewRecipeRow<'a> {
    pub title: &'a str,
    pub description: Option<&'a str>,
    pub servings: i32,
    pub total_calories: f64,
    pub total_protein: f64,
    pub total_carbs: f64,
    pub total_fat: f64,
}

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::recipe_steps)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct RecipeStepRow {
    pub id: Uuid,
    pub recipe_id: Uuid,
    pub step_order: i32,
    pub instruction: String,
    pub notes: Option<String>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::recipe_steps)]
pub struct NewRecipeStepRow<'a> {
    pub recipe_id: Uuid,
    pub step_order: i32,
    pub instruction: &'a str,
    pub notes: Option<&'a str>,
}

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::recipe_ingredients)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct RecipeIngredientRow {
    pub id: Uuid,
    pub recipe_id: Uuid,
    pub ingredient_id: Uuid,
    pub line_order: i32,
    pub quantity: f64,
    pub unit: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::recipe_ingredients)]
pub struct NewRecipeIngredientRow<'a> {
    pub recipe_id: Uuid,
    pub ingredient_id: Uuid,
    pub line_order: i32,
    pub quantity: f64,
    pub unit: &'a str,
}
