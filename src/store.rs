//! MovieStore - the id-indexed in-memory movie collection.
//!
//! Ids are derived from current state: a new record gets `max(id) + 1`, or
//! `1` when the store is empty. Deleting the highest id and inserting again
//! hands out that same id.
//!
//! Since every new id is the current maximum, ascending id order is the
//! insertion order, so a `BTreeMap` iterates records in the order they were
//! added.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use thiserror::Error;

use crate::movie::{Movie, MovieId, MovieView};

/// Errors surfaced by store operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("movie {0} not found")]
    NotFound(MovieId),
    #[error("store lock poisoned during {0}")]
    LockPoisoned(&'static str),
}

/// Predicate for [`MovieStore::filter`]. Absent bounds match everything.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MovieFilter {
    pub min_rating: Option<f64>,
    pub max_year: Option<i64>,
}

impl MovieFilter {
    pub fn matches(&self, movie: &Movie) -> bool {
        self.min_rating.map_or(true, |min| movie.rating >= min)
            && self.max_year.map_or(true, |max| movie.year <= max)
    }
}

/// In-memory movie collection.
///
/// Clone-friendly via Arc; clones share the same collection. Every
/// operation holds the mutex for its whole duration, so id assignment and
/// delete-then-insert sequences never interleave.
#[derive(Clone, Default)]
pub struct MovieStore {
    movies: Arc<Mutex<BTreeMap<MovieId, Movie>>>,
}

impl MovieStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `movies`, ids assigned 1, 2, 3, ... in order.
    pub fn with_movies(movies: impl IntoIterator<Item = Movie>) -> Self {
        let map = movies
            .into_iter()
            .enumerate()
            .map(|(i, movie)| (i as MovieId + 1, movie))
            .collect();
        Self {
            movies: Arc::new(Mutex::new(map)),
        }
    }

    /// Create a store seeded with [`starter_set`](crate::starter_set).
    pub fn starter() -> Self {
        Self::with_movies(crate::movie::starter_set())
    }

    fn lock(
        &self,
        operation: &'static str,
    ) -> Result<MutexGuard<'_, BTreeMap<MovieId, Movie>>, StoreError> {
        self.movies
            .lock()
            .map_err(|_| StoreError::LockPoisoned(operation))
    }

    /// Store `movie` under a freshly derived id and return it with that id.
    pub fn insert(&self, movie: Movie) -> Result<MovieView, StoreError> {
        let mut movies = self.lock("insert")?;
        let id = next_id(&movies);
        movies.insert(id, movie.clone());
        Ok(MovieView::new(id, movie))
    }

    pub fn get(&self, id: MovieId) -> Result<MovieView, StoreError> {
        let movies = self.lock("get")?;
        movies
            .get(&id)
            .map(|movie| MovieView::from((id, movie)))
            .ok_or(StoreError::NotFound(id))
    }

    /// Every record matching `filter`, in insertion order.
    pub fn filter(&self, filter: &MovieFilter) -> Result<Vec<MovieView>, StoreError> {
        let movies = self.lock("filter")?;
        Ok(movies
            .iter()
            .filter(|(_, movie)| filter.matches(movie))
            .map(|(id, movie)| MovieView::from((*id, movie)))
            .collect())
    }

    pub fn delete(&self, id: MovieId) -> Result<(), StoreError> {
        let mut movies = self.lock("delete")?;
        movies
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound(id))
    }

    /// The `limit` best-rated records, highest first. Equal ratings keep
    /// insertion order.
    pub fn top_rated(&self, limit: usize) -> Result<Vec<MovieView>, StoreError> {
        let movies = self.lock("top_rated")?;
        let mut ranked: Vec<(&MovieId, &Movie)> = movies.iter().collect();
        // sort_by is stable
        ranked.sort_by(|(_, a), (_, b)| b.rating.total_cmp(&a.rating));
        Ok(ranked
            .into_iter()
            .take(limit)
            .map(|(id, movie)| MovieView::from((*id, movie)))
            .collect())
    }

    pub fn len(&self) -> Result<usize, StoreError> {
        Ok(self.lock("len")?.len())
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.lock("is_empty")?.is_empty())
    }
}

fn next_id(movies: &BTreeMap<MovieId, Movie>) -> MovieId {
    movies.keys().next_back().map_or(1, |max| max + 1)
}
