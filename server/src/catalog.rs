//! Diesel-backed implementation of the core's catalog trait.

use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

use tureen_core::{CatalogError, IngredientCatalog, IngredientRecord, NewIngredient};

use crate::db::DbPool;
use crate::models::{IngredientRow, NewIngredientRow};
use crate::schema::ingredients;

diesel::define_sql_function! {
    fn lower(x: diesel::sql_types::Text) -> diesel::sql_types::Text;
}

/// Catalog store over the PostgreSQL ingredients table.
///
/// Cheap to construct per request; the pool is internally shared.
pub struct DieselCatalog {
    pool: DbPool,
}

impl DieselCatalog {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn unavailable(err: impl std::fmt::Display) -> CatalogError {
    CatalogError::Unavailable(err.to_string())
}

impl IngredientCatalog for DieselCatalog {
    fn find_by_exact_name(&self, name: &str) -> Result<Option<IngredientRecord>, CatalogError> {
        let mut conn = self.pool.get().map_err(unavailable)?;

        let row: Option<IngredientRow> = ingredients::table
            .filter(lower(ingredients::name).eq(name.to_lowercase()))
            .select(IngredientRow::as_select())
            .first(&mut conn)
            .optional()
            .map_err(unavailable)?;

        row.map(IngredientRow::into_record).transpose()
    }

    fn list_all(&self) -> Result<Vec<IngredientRecord>, CatalogError> {
        let mut conn = self.pool.get().map_err(unavailable)?;

        // Creation order, id as a deterministic tiebreak: list ordering is
        // the fuzzy matcher's tie-break, so it must be stable.
        let rows: Vec<IngredientRow> = ingredients::table
            .select(IngredientRow::as_select())
            .order((ingredients::created_at.asc(), ingredients::id.asc()))
            .load(&mut conn)
            .map_err(unavailable)?;

        rows.into_iter().map(IngredientRow::into_record).collect()
    }

    fn create(&self, fields: NewIngredient) -> Result<IngredientRecord, CatalogError> {
        let mut conn = self.pool.get().map_err(unavailable)?;

        let result = diesel::insert_into(ingredients::table)
            .values(NewIngredientRow::from_fields(&fields))
            .returning(IngredientRow::as_returning())
            .get_result::<IngredientRow>(&mut conn);

        match result {
            Ok(row) => row.into_record(),
            Err(DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _)) => {
                Err(CatalogError::DuplicateName(fields.name))
            }
            Err(err) => Err(unavailable(err)),
        }
    }
}
