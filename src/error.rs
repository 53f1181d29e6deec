//! Error type for catalog operations.

use thiserror::Error;

use crate::movie::MovieId;
use crate::store::StoreError;
use crate::validation::ValidationError;

/// Everything a catalog call can fail with.
///
/// `Validation` and `NotFound` are the outcomes a caller can cause;
/// `Storage` only appears if the store's lock was poisoned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    /// Input broke a field constraint. The store was not touched.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Well-formed id with no matching record.
    #[error("movie {0} not found")]
    NotFound(MovieId),
    #[error("storage error: {0}")]
    Storage(String),
}

impl From<StoreError> for CatalogError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => CatalogError::NotFound(id),
            StoreError::LockPoisoned(_) => CatalogError::Storage(err.to_string()),
        }
    }
}

impl CatalogError {
    /// Map this error to an HTTP-style status code.
    pub fn status_code(&self) -> u16 {
        match self {
            CatalogError::Validation(_) => 422,
            CatalogError::NotFound(_) => 404,
            CatalogError::Storage(_) => 500,
        }
    }
}
