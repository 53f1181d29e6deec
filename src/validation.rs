//! Request validation - field and range constraints checked before any
//! request reaches the store.
//!
//! Validation is pure: it accepts or rejects, and on rejection reports every
//! failing constraint with the field it belongs to.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::movie::{Movie, MovieId, MovieInput};

/// Exclusive bounds on `year`.
pub const YEAR_MIN_EXCLUSIVE: i64 = 1900;
pub const YEAR_MAX_EXCLUSIVE: i64 = 2100;

/// Exclusive bounds on a stored `rating`.
pub const RATING_MIN_EXCLUSIVE: f64 = 0.0;
pub const RATING_MAX_EXCLUSIVE: f64 = 10.0;

/// Inclusive bounds on the `min_rating` query parameter.
pub const MIN_RATING_QUERY_FLOOR: f64 = 0.0;
pub const MIN_RATING_QUERY_CEIL: f64 = 10.0;

/// Default ranking size when `limit` is not given.
pub const DEFAULT_TOP_LIMIT: usize = 3;
/// `limit` must be at least 1 and strictly below this.
pub const TOP_LIMIT_MAX_EXCLUSIVE: i64 = 10;

/// One failed constraint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Input rejected before touching the store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationError {
    violations: Vec<FieldViolation>,
}

impl ValidationError {
    pub fn new(violations: Vec<FieldViolation>) -> Self {
        Self { violations }
    }

    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(vec![FieldViolation::new(field, message)])
    }

    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    /// True if any violation names `field`.
    pub fn has_field(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation failed: ")?;
        for (i, v) in self.violations.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", v.field, v.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Accumulates violations so a caller sees every bad field at once.
#[derive(Default)]
struct Violations(Vec<FieldViolation>);

impl Violations {
    fn check(&mut self, ok: bool, field: &str, message: impl FnOnce() -> String) {
        if !ok {
            self.0.push(FieldViolation::new(field, message()));
        }
    }

    fn finish<T>(self, value: T) -> Result<T, ValidationError> {
        if self.0.is_empty() {
            Ok(value)
        } else {
            Err(ValidationError::new(self.0))
        }
    }
}

fn year_in_range(year: i64) -> bool {
    year > YEAR_MIN_EXCLUSIVE && year < YEAR_MAX_EXCLUSIVE
}

// NaN fails both comparisons.
fn rating_in_range(rating: f64) -> bool {
    rating > RATING_MIN_EXCLUSIVE && rating < RATING_MAX_EXCLUSIVE
}

impl MovieInput {
    /// Check every field constraint and produce the stored form.
    pub fn validate(self) -> Result<Movie, ValidationError> {
        let mut violations = Violations::default();
        violations.check(year_in_range(self.year), "year", || {
            format!(
                "must be greater than {} and less than {}, got {}",
                YEAR_MIN_EXCLUSIVE, YEAR_MAX_EXCLUSIVE, self.year
            )
        });
        violations.check(rating_in_range(self.rating), "rating", || {
            format!(
                "must be greater than {} and less than {}, got {}",
                RATING_MIN_EXCLUSIVE, RATING_MAX_EXCLUSIVE, self.rating
            )
        });
        violations.finish(Movie {
            title: self.title,
            year: self.year,
            rating: self.rating,
        })
    }
}

/// Check a path identifier for lookup or delete. Ids start at 1.
pub fn validate_id(raw: i64) -> Result<MovieId, ValidationError> {
    if raw >= 1 {
        Ok(raw as MovieId)
    } else {
        Err(ValidationError::single(
            "id",
            format!("must be greater than or equal to 1, got {}", raw),
        ))
    }
}

/// Query parameters for listing and filtering.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct FilterParams {
    pub min_rating: Option<f64>,
    pub max_year: Option<i64>,
}

impl FilterParams {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut violations = Violations::default();
        if let Some(min_rating) = self.min_rating {
            violations.check(
                (MIN_RATING_QUERY_FLOOR..=MIN_RATING_QUERY_CEIL).contains(&min_rating),
                "min_rating",
                || {
                    format!(
                        "must be between {} and {} inclusive, got {}",
                        MIN_RATING_QUERY_FLOOR, MIN_RATING_QUERY_CEIL, min_rating
                    )
                },
            );
        }
        violations.finish(())
    }
}

/// Query parameters for the top-rated ranking.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct TopRatedParams {
    pub limit: Option<i64>,
}

impl TopRatedParams {
    /// Resolve the default and check `1 <= limit < 10`.
    pub fn validate(&self) -> Result<usize, ValidationError> {
        let limit = match self.limit {
            None => return Ok(DEFAULT_TOP_LIMIT),
            Some(limit) => limit,
        };
        if (1..TOP_LIMIT_MAX_EXCLUSIVE).contains(&limit) {
            Ok(limit as usize)
        } else {
            Err(ValidationError::single(
                "limit",
                format!(
                    "must be at least 1 and less than {}, got {}",
                    TOP_LIMIT_MAX_EXCLUSIVE, limit
                ),
            ))
        }
    }
}
