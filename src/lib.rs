//! movie_catalog - an in-memory movie catalog with validated access.
//!
//! The catalog owns a single collection of movies keyed by an integer id the
//! store assigns. Every entry point runs the request validator before the
//! store is touched, and every store operation reports absence as a typed
//! `NotFound` instead of an empty response.
//!
//! ## Quick Start
//!
//! ```ignore
//! use movie_catalog::{Catalog, MovieInput, MovieStore, TopRatedParams};
//!
//! let catalog = Catalog::new(MovieStore::starter());
//!
//! let created = catalog.create(MovieInput {
//!     title: "Alien".into(),
//!     year: 1979,
//!     rating: 8.5,
//! })?;
//! assert_eq!(created.id, 3);
//!
//! let best = catalog.top_rated(&TopRatedParams { limit: Some(1) })?;
//! assert_eq!(best[0].title, "Inception");
//! ```
//!
//! ## HTTP transport
//!
//! With the default `http` feature, [`http::router`] exposes the catalog as a
//! REST API (`/movies/`, `/movies/{id}`, `/movies/top/`).

mod catalog;
mod error;
mod movie;
mod store;
mod validation;

pub mod config;

#[cfg(feature = "http")]
pub mod http;

pub use catalog::Catalog;
pub use error::CatalogError;
pub use movie::{starter_set, Movie, MovieId, MovieInput, MovieView};
pub use store::{MovieFilter, MovieStore, StoreError};
pub use validation::{
    validate_id, FieldViolation, FilterParams, TopRatedParams, ValidationError,
    DEFAULT_TOP_LIMIT,
};
