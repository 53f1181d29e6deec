//! Catalog - the validator-gated entry point to the movie store.
//!
//! Each operation validates its input first and only then calls the store,
//! so a rejected request never changes or even reads the collection.

use tracing::{debug, info, warn};

use crate::error::CatalogError;
use crate::movie::{MovieInput, MovieView};
use crate::store::{MovieFilter, MovieStore};
use crate::validation::{validate_id, FilterParams, TopRatedParams, ValidationError};

/// Owns the movie store and exposes the five catalog operations.
///
/// Construct one per process (or per test) and share it behind an `Arc`.
pub struct Catalog {
    store: MovieStore,
}

impl Catalog {
    pub fn new(store: MovieStore) -> Self {
        Self { store }
    }

    /// Get a reference to the underlying store.
    pub fn store(&self) -> &MovieStore {
        &self.store
    }

    pub fn create(&self, input: MovieInput) -> Result<MovieView, CatalogError> {
        let movie = input.validate().map_err(rejected)?;
        let view = self.store.insert(movie)?;
        info!(id = view.id, title = %view.title, "movie created");
        Ok(view)
    }

    /// Look up by raw path id. Ids below 1 are a validation failure, an
    /// absent id is `NotFound`.
    pub fn get(&self, raw_id: i64) -> Result<MovieView, CatalogError> {
        let id = validate_id(raw_id).map_err(rejected)?;
        let view = self.store.get(id).inspect_err(|_| debug!(id, "movie not found"))?;
        debug!(id, "movie fetched");
        Ok(view)
    }

    pub fn list(&self, params: &FilterParams) -> Result<Vec<MovieView>, CatalogError> {
        params.validate().map_err(rejected)?;
        let filter = MovieFilter {
            min_rating: params.min_rating,
            max_year: params.max_year,
        };
        let movies = self.store.filter(&filter)?;
        debug!(
            min_rating = ?params.min_rating,
            max_year = ?params.max_year,
            matched = movies.len(),
            "movies listed"
        );
        Ok(movies)
    }

    pub fn delete(&self, raw_id: i64) -> Result<(), CatalogError> {
        let id = validate_id(raw_id).map_err(rejected)?;
        self.store
            .delete(id)
            .inspect_err(|_| debug!(id, "delete of missing movie"))?;
        info!(id, "movie deleted");
        Ok(())
    }

    pub fn top_rated(&self, params: &TopRatedParams) -> Result<Vec<MovieView>, CatalogError> {
        let limit = params.validate().map_err(rejected)?;
        let movies = self.store.top_rated(limit)?;
        debug!(limit, returned = movies.len(), "top rated listed");
        Ok(movies)
    }
}

fn rejected(err: ValidationError) -> CatalogError {
    warn!(%err, "request rejected");
    CatalogError::Validation(err)
}
