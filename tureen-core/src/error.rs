use thiserror::Error;

use crate::llm::LlmError;

/// Errors from the catalog store collaborator.
///
/// "Ingredient not found" is never an error anywhere in the core; absence is
/// absorbed into placeholder synthesis by the resolver.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The storage backing the catalog could not be reached or failed.
    #[error("catalog unavailable: {0}")]
    Unavailable(String),

    /// An insert collided with an existing record of the same name
    /// (case-insensitive). The resolver recovers by re-fetching.
    #[error("ingredient name already exists: {0}")]
    DuplicateName(String),

    /// A stored record violates the data model (e.g. an unknown unit string).
    #[error("corrupt catalog record: {0}")]
    InvalidRecord(String),
}

/// Errors from the AI recipe-generation flow.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("Failed to parse LLM response: {0}")]
    Parse(String),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
}
