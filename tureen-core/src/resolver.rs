//! Ingredient resolution.
//!
//! Maps a free-text ingredient name (user-typed or LLM-generated) to a stable
//! catalog record: exact lookup first, then similarity-ranked fuzzy lookup
//! over the whole catalog, then on-demand placeholder synthesis. Resolution
//! never fails for "not found"; only catalog-store faults propagate.

use crate::catalog::IngredientCatalog;
use crate::error::CatalogError;
use crate::similarity::similarity;
use crate::types::{IngredientRecord, IngredientRef, NewIngredient, ResolvedLine};

/// Minimum similarity score a fuzzy candidate must strictly exceed.
pub const SIMILARITY_THRESHOLD: f64 = 0.6;

/// Resolves free-text ingredient names against an injected catalog.
pub struct IngredientResolver<'a> {
    catalog: &'a dyn IngredientCatalog,
}

impl<'a> IngredientResolver<'a> {
    pub fn new(catalog: &'a dyn IngredientCatalog) -> Self {
        Self { catalog }
    }

    /// Resolve one name to a catalog record, creating a placeholder if
    /// nothing matches.
    ///
    /// Exact (case-insensitive) matches win unconditionally, regardless of
    /// what fuzzy matching would score. Calling twice with the same string
    /// returns the same record the second time: either it matched the first
    /// time, or the placeholder created then is now exactly matchable.
    pub fn resolve(&self, name: &str) -> Result<IngredientRecord, CatalogError> {
        if let Some(record) = self.catalog.find_by_exact_name(name)? {
            return Ok(record);
        }

        if let Some(record) = self.best_fuzzy_match(name)? {
            return Ok(record);
        }

        self.create_placeholder(name)
    }

    /// Scan the catalog for the best-scoring candidate above the threshold.
    ///
    /// A candidate only replaces the current best when it strictly beats it,
    /// so on an exact score tie the first-encountered record wins; catalog
    /// iteration order is the deliberate tie-break.
    fn best_fuzzy_match(&self, name: &str) -> Result<Option<IngredientRecord>, CatalogError> {
        let needle = name.to_lowercase();

        let mut best: Option<IngredientRecord> = None;
        let mut best_score = 0.0;

        for candidate in self.catalog.list_all()? {
            let score = similarity(&needle, &candidate.name.to_lowercase());
            if score > SIMILARITY_THRESHOLD && score > best_score {
                best_score = score;
                best = Some(candidate);
            }
        }

        if let Some(record) = &best {
            tracing::debug!(
                name,
                matched = %record.name,
                score = best_score,
                "fuzzy-matched ingredient"
            );
        }

        Ok(best)
    }

    /// Create (or recover) the durable placeholder record for a novel name.
    ///
    /// The exact-name re-check and the DuplicateName recovery both guard the
    /// race where a concurrent resolution of the same name created the
    /// placeholder first; the unique constraint at the catalog layer makes
    /// this converge on a single record.
    fn create_placeholder(&self, name: &str) -> Result<IngredientRecord, CatalogError> {
        if let Some(record) = self.catalog.find_by_exact_name(name)? {
            return Ok(record);
        }

        match self.catalog.create(NewIngredient::placeholder(name)) {
            Ok(record) => {
                tracing::info!(name, id = %record.id, "no catalog match, created placeholder");
                Ok(record)
            }
            Err(CatalogError::DuplicateName(_)) => {
                self.catalog.find_by_exact_name(name)?.ok_or_else(|| {
                    CatalogError::Unavailable(format!(
                        "placeholder for {name:?} reported as duplicate but not found"
                    ))
                })
            }
            Err(err) => Err(err),
        }
    }

    /// Resolve each entry independently and in input order.
    ///
    /// Quantity and unit pass through untouched, with no reordering and no
    /// deduplication: two lines naming the same ingredient become two output
    /// lines pointing at the same record.
    pub fn resolve_batch(
        &self,
        entries: &[IngredientRef],
    ) -> Result<Vec<ResolvedLine>, CatalogError> {
        entries
            .iter()
            .map(|entry| {
                let record = self.resolve(&entry.name)?;
                Ok(ResolvedLine {
                    record,
                    quantity: entry.quantity,
                    unit: entry.unit.clone(),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::InMemoryCatalog;
    use crate::types::MeasurementUnit;

    fn entry(name: &str, calories: f64) -> NewIngredient {
        NewIngredient {
            name: name.to_string(),
            calories,
            protein: 1.0,
            carbohydrates: 1.0,
            fats: 1.0,
            unit: MeasurementUnit::Gram,
            category: "Test".to_string(),
        }
    }

    #[test]
    fn test_exact_match_is_case_insensitive() {
        let catalog = InMemoryCatalog::with_records([entry("Chicken Breast", 165.0)]).unwrap();
        let resolver = IngredientResolver::new(&catalog);

        let record = resolver.resolve("chicken breast").unwrap();
        assert_eq!(record.name, "Chicken Breast");
        assert_eq!(record.calories, 165.0);
    }

    #[test]
    fn test_exact_match_beats_fuzzy() {
        // "Chicken" matches "Chicken" exactly even though "Chicken Breast"
        // also scores well under fuzzy similarity.
        let catalog =
            InMemoryCatalog::with_records([entry("Chicken Breast", 165.0), entry("Chicken", 200.0)])
                .unwrap();
        let resolver = IngredientResolver::new(&catalog);

        let record = resolver.resolve("chicken").unwrap();
        assert_eq!(record.name, "Chicken");
    }

    #[test]
    fn test_fuzzy_match_above_threshold() {
        let catalog = InMemoryCatalog::with_records([entry("Chicken Breast", 165.0)]).unwrap();
        let resolver = IngredientResolver::new(&catalog);

        // "chicken breasts" is not an exact match, but scores well above 0.6.
        let record = resolver.resolve("chicken breasts").unwrap();
        assert_eq!(record.name, "Chicken Breast");
        assert_eq!(catalog.len(), 1, "no placeholder should be created");
    }

    #[test]
    fn test_no_match_below_threshold() {
        let catalog = InMemoryCatalog::with_records([entry("Olive Oil", 884.0)]).unwrap();
        let resolver = IngredientResolver::new(&catalog);

        let record = resolver.resolve("Dragonfruit").unwrap();
        assert_eq!(record.category, "Unknown");
        assert_eq!(catalog.len(), 2, "a placeholder should have been created");
    }

    #[test]
    fn test_score_exactly_at_threshold_is_rejected() {
        // "saf" against "saffron": 3 matching chars over lengths 3 + 7 gives
        // a ratio of exactly 0.6. The threshold is strict, so this must fall
        // through to placeholder synthesis rather than fuzzy-match.
        let catalog = InMemoryCatalog::with_records([entry("Saffron", 310.0)]).unwrap();
        let resolver = IngredientResolver::new(&catalog);

        let record = resolver.resolve("saf").unwrap();
        assert_eq!(record.name, "saf");
        assert_eq!(record.category, "Unknown");
        assert_eq!(catalog.len(), 2, "a placeholder should have been created");
    }

    #[test]
    fn test_tie_break_prefers_first_seen() {
        // Both candidates score identically against "chicken breastX"-style
        // inputs; use two names equidistant from the needle.
        let catalog =
            InMemoryCatalog::with_records([entry("Green Beans", 31.0), entry("Green Peans", 99.0)])
                .unwrap();
        let resolver = IngredientResolver::new(&catalog);

        // Equal similarity to both (they differ from each other by one char
        // in the same position); the first-inserted record must win.
        let record = resolver.resolve("Green Veans").unwrap();
        assert_eq!(record.name, "Green Beans");
    }

    #[test]
    fn test_placeholder_synthesis_fields() {
        let catalog = InMemoryCatalog::new();
        let resolver = IngredientResolver::new(&catalog);

        let record = resolver.resolve("Unicorn Meat").unwrap();
        assert_eq!(record.name, "Unicorn Meat");
        assert_eq!(record.calories, 50.0);
        assert_eq!(record.protein, 5.0);
        assert_eq!(record.carbohydrates, 10.0);
        assert_eq!(record.fats, 1.0);
        assert_eq!(record.unit, MeasurementUnit::Gram);
        assert_eq!(record.category, "Unknown");
    }

    #[test]
    fn test_placeholder_is_idempotent() {
        let catalog = InMemoryCatalog::new();
        let resolver = IngredientResolver::new(&catalog);

        let first = resolver.resolve("Unicorn Meat").unwrap();
        let second = resolver.resolve("Unicorn Meat").unwrap();
        assert_eq!(first.id, second.id);
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_resolution_is_total() {
        let catalog = InMemoryCatalog::new();
        let resolver = IngredientResolver::new(&catalog);

        for name in ["x", "  spaced out  ", "救命啊", "!!!"] {
            let record = resolver.resolve(name).unwrap();
            assert_eq!(record.name, name);
        }
    }

    #[test]
    fn test_duplicate_create_conflict_recovers_existing() {
        // Catalog that hides a record from lookups until it has been asked
        // once, simulating a concurrent writer sneaking in between the
        // resolver's re-check and its create call.
        struct RacyCatalog {
            inner: InMemoryCatalog,
            misses: std::sync::atomic::AtomicUsize,
        }

        impl IngredientCatalog for RacyCatalog {
            fn find_by_exact_name(
                &self,
                name: &str,
            ) -> Result<Option<IngredientRecord>, CatalogError> {
                use std::sync::atomic::Ordering;
                // First two lookups (exact path + placeholder re-check) miss.
                if self.misses.fetch_add(1, Ordering::SeqCst) < 2 {
                    return Ok(None);
                }
                self.inner.find_by_exact_name(name)
            }

            fn list_all(&self) -> Result<Vec<IngredientRecord>, CatalogError> {
                Ok(vec![])
            }

            fn create(&self, fields: NewIngredient) -> Result<IngredientRecord, CatalogError> {
                Err(CatalogError::DuplicateName(fields.name))
            }
        }

        let racy = RacyCatalog {
            inner: InMemoryCatalog::with_records([entry("Unicorn Meat", 50.0)]).unwrap(),
            misses: std::sync::atomic::AtomicUsize::new(0),
        };
        let resolver = IngredientResolver::new(&racy);

        let record = resolver.resolve("Unicorn Meat").unwrap();
        assert_eq!(record.name, "Unicorn Meat");
    }

    #[test]
    fn test_batch_preserves_order_and_duplicates() {
        let catalog = InMemoryCatalog::with_records([
            entry("Chicken Breast", 165.0),
            entry("Broccoli", 34.0),
        ])
        .unwrap();
        let resolver = IngredientResolver::new(&catalog);

        let entries = vec![
            IngredientRef {
                name: "Broccoli".to_string(),
                quantity: 100.0,
                unit: "g".to_string(),
            },
            IngredientRef {
                name: "Chicken Breast".to_string(),
                quantity: 150.0,
                unit: "g".to_string(),
            },
            IngredientRef {
                name: "Broccoli".to_string(),
                quantity: 50.0,
                unit: "g".to_string(),
            },
        ];

        let lines = resolver.resolve_batch(&entries).unwrap();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].record.name, "Broccoli");
        assert_eq!(lines[1].record.name, "Chicken Breast");
        assert_eq!(lines[2].record.name, "Broccoli");
        assert_eq!(lines[0].quantity, 100.0);
        assert_eq!(lines[2].quantity, 50.0);
        // Two lines naming the same ingredient share one record.
        assert_eq!(lines[0].record.id, lines[2].record.id);
    }

    #[test]
    fn test_batch_with_novel_names_creates_placeholders_in_order() {
        let catalog = InMemoryCatalog::new();
        let resolver = IngredientResolver::new(&catalog);

        let entries = vec![
            IngredientRef {
                name: "Moon Cheese".to_string(),
                quantity: 1.0,
                unit: "piece".to_string(),
            },
            IngredientRef {
                name: "Star Salt".to_string(),
                quantity: 5.0,
                unit: "g".to_string(),
            },
        ];

        let lines = resolver.resolve_batch(&entries).unwrap();
        assert_eq!(lines[0].record.name, "Moon Cheese");
        assert_eq!(lines[1].record.name, "Star Salt");
        assert_eq!(catalog.len(), 2);
    }
}
