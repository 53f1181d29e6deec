//! Movie records in their three shapes: stored, accepted, returned.

use serde::{Deserialize, Serialize};

/// Store-assigned identifier. Never supplied by callers.
pub type MovieId = u64;

/// A movie as it is kept in the store. Only built from a validated
/// [`MovieInput`] (see [`MovieInput::validate`](crate::MovieInput::validate)).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub title: String,
    pub year: i64,
    pub rating: f64,
}

/// The body accepted on creation. Carries no id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MovieInput {
    pub title: String,
    pub year: i64,
    pub rating: f64,
}

/// The shape returned to callers: the stored fields plus the id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MovieView {
    pub id: MovieId,
    pub title: String,
    pub year: i64,
    pub rating: f64,
}

impl MovieView {
    pub fn new(id: MovieId, movie: Movie) -> Self {
        Self {
            id,
            title: movie.title,
            year: movie.year,
            rating: movie.rating,
        }
    }
}

impl From<(MovieId, &Movie)> for MovieView {
    fn from((id, movie): (MovieId, &Movie)) -> Self {
        Self::new(id, movie.clone())
    }
}

/// The two records a fresh deployment can start with, in insertion order.
pub fn starter_set() -> Vec<Movie> {
    vec![
        Movie {
            title: "Matrix".to_string(),
            year: 1999,
            rating: 8.7,
        },
        Movie {
            title: "Inception".to_string(),
            year: 2010,
            rating: 9.0,
        },
    ]
}
