//! Catalog store abstraction.
//!
//! The resolver only ever needs three operations from its storage
//! collaborator, so that is the whole trait. The server implements it over
//! diesel; tests use [`InMemoryCatalog`].

use std::sync::Mutex;

use uuid::Uuid;

use crate::error::CatalogError;
use crate::types::{IngredientRecord, NewIngredient};

/// Storage collaborator for ingredient records.
///
/// `list_all` must return records in a stable iteration order; the fuzzy
/// matcher breaks exact score ties in favor of the first-encountered record.
pub trait IngredientCatalog: Send + Sync {
    /// Look up a record whose name equals `name` case-insensitively.
    fn find_by_exact_name(&self, name: &str) -> Result<Option<IngredientRecord>, CatalogError>;

    /// Every record in the catalog, in a stable order.
    fn list_all(&self) -> Result<Vec<IngredientRecord>, CatalogError>;

    /// Insert a new record. A case-insensitive name collision must be
    /// reported as [`CatalogError::DuplicateName`], never silently dropped.
    fn create(&self, fields: NewIngredient) -> Result<IngredientRecord, CatalogError>;
}

/// Mutex-guarded in-memory catalog preserving insertion order.
///
/// Enforces the same case-insensitive name uniqueness as the database
/// implementation, so the resolver's conflict-recovery path is exercisable
/// without a database.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    records: Mutex<Vec<IngredientRecord>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog pre-populated with the given entries.
    pub fn with_records(
        entries: impl IntoIterator<Item = NewIngredient>,
    ) -> Result<Self, CatalogError> {
        let catalog = Self::new();
        for entry in entries {
            catalog.create(entry)?;
        }
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.records.lock().map(|r| r.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Vec<IngredientRecord>>, CatalogError> {
        self.records
            .lock()
            .map_err(|_| CatalogError::Unavailable("catalog mutex poisoned".to_string()))
    }
}

impl IngredientCatalog for InMemoryCatalog {
    fn find_by_exact_name(&self, name: &str) -> Result<Option<IngredientRecord>, CatalogError> {
        let records = self.lock()?;
        // Full Unicode lowercasing, matching what Postgres lower() does for
        // names like "Crème Fraîche".
        let needle = name.to_lowercase();
        Ok(records
            .iter()
            .find(|r| r.name.to_lowercase() == needle)
            .cloned())
    }

    fn list_all(&self) -> Result<Vec<IngredientRecord>, CatalogError> {
        Ok(self.lock()?.clone())
    }

    fn create(&self, fields: NewIngredient) -> Result<IngredientRecord, CatalogError> {
        let mut records = self.lock()?;
        let needle = fields.name.to_lowercase();
        if records.iter().any(|r| r.name.to_lowercase() == needle) {
            return Err(CatalogError::DuplicateName(fields.name));
        }

        let record = IngredientRecord {
            id: Uuid::new_v4(),
            name: fields.name,
            calories: fields.calories,
            protein: fields.protein,
            carbohydrates: fields.carbohydrates,
            fats: fields.fats,
            unit: fields.unit,
            category: fields.category,
        };
        records.push(record.clone());
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MeasurementUnit;

    fn entry(name: &str) -> NewIngredient {
        NewIngredient {
            name: name.to_string(),
            calories: 100.0,
            protein: 10.0,
            carbohydrates: 5.0,
            fats: 2.0,
            unit: MeasurementUnit::Gram,
            category: "Test".to_string(),
        }
    }

    #[test]
    fn test_find_is_case_insensitive() {
        let catalog = InMemoryCatalog::with_records([entry("Chicken Breast")]).unwrap();
        let found = catalog.find_by_exact_name("chicken breast").unwrap();
        assert_eq!(found.unwrap().name, "Chicken Breast");
    }

    #[test]
    fn test_find_missing_returns_none() {
        let catalog = InMemoryCatalog::new();
        assert!(catalog.find_by_exact_name("anything").unwrap().is_none());
    }

    #[test]
    fn test_list_all_preserves_insertion_order() {
        let catalog =
            InMemoryCatalog::with_records([entry("Salt"), entry("Pepper"), entry("Cumin")])
                .unwrap();
        let names: Vec<String> = catalog
            .list_all()
            .unwrap()
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, vec!["Salt", "Pepper", "Cumin"]);
    }

    #[test]
    fn test_case_folding_handles_non_ascii_names() {
        let catalog = InMemoryCatalog::with_records([entry("Crème Fraîche")]).unwrap();

        let found = catalog.find_by_exact_name("CRÈME FRAÎCHE").unwrap();
        assert_eq!(found.unwrap().name, "Crème Fraîche");

        let err = catalog.create(entry("crème fraîche")).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateName(_)));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_create_rejects_case_insensitive_duplicate() {
        let catalog = InMemoryCatalog::with_records([entry("Butter")]).unwrap();
        let err = catalog.create(entry("BUTTER")).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateName(name) if name == "BUTTER"));
        assert_eq!(catalog.len(), 1);
    }
}
