//! Error type for the publication store.

use thiserror::Error;

/// Failure opening, querying, or writing the publication store.
///
/// Every variant is fatal to the run that hits it; there is no retry path
/// anywhere in the pipeline.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store could not be opened or its schema could not be created.
    #[error("Failed to open publication store at {path}: {source}")]
    Open {
        path: String,
        source: rusqlite::Error,
    },
    /// A publication lookup failed.
    #[error("Publication lookup failed: {0}")]
    Query(rusqlite::Error),
    /// A publication insert failed.
    #[error("Publication insert failed: {0}")]
    Insert(rusqlite::Error),
}
