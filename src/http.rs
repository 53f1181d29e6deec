//! HTTP transport for the catalog - maps REST requests onto [`Catalog`]
//! operations and catalog errors onto status codes.
//!
//! Requires the `http` feature. Uses axum for routing.
//!
//! ## Routes
//!
//! - `POST /movies/` - create. Body = `MovieInput`. `201` + `MovieView`.
//! - `GET /movies/?min_rating=&max_year=` - filter. `200` + list.
//! - `GET /movies/top/?limit=` - ranking, default limit 3. `200` + list.
//! - `GET /movies/{id}` - lookup. `200`, or `404` if absent.
//! - `DELETE /movies/{id}` - remove. `204`, or `404` if absent.
//! - `GET /health` - `{ "ok": true, "movies": <count> }`.
//!
//! Malformed bodies, paths and query strings are reported the same way as
//! out-of-range values: `422` with `{ "detail": [{ "field", "message" }] }`.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use movie_catalog::{http, Catalog, MovieStore};
//!
//! let catalog = Arc::new(Catalog::new(MovieStore::starter()));
//! http::serve(catalog, "0.0.0.0:8000").await?;
//! ```

use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

use crate::catalog::Catalog;
use crate::error::CatalogError;
use crate::movie::{MovieInput, MovieView};
use crate::validation::{FilterParams, TopRatedParams, ValidationError};

type SharedCatalog = Arc<Catalog>;

/// Build an axum `Router` serving the given catalog.
pub fn router(catalog: SharedCatalog) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/movies", get(list_handler).post(create_handler))
        .route("/movies/", get(list_handler).post(create_handler))
        .route("/movies/top", get(top_rated_handler))
        .route("/movies/top/", get(top_rated_handler))
        .route("/movies/:id", get(get_handler).delete(delete_handler))
        .with_state(catalog)
}

/// Serve the catalog over HTTP at the given address until Ctrl-C.
pub async fn serve(catalog: SharedCatalog, addr: &str) -> Result<(), std::io::Error> {
    let app = router(catalog);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(addr = %listener.local_addr()?, "movie catalog listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body = match &self {
            CatalogError::Validation(e) => json!({ "detail": e.violations() }),
            other => json!({ "detail": other.to_string() }),
        };
        (status, Json(body)).into_response()
    }
}

/// Turn an extractor rejection into a field-level validation error.
fn malformed(field: &str, message: String) -> CatalogError {
    CatalogError::Validation(ValidationError::single(field, message))
}

/// `GET /health`
async fn health_handler(
    State(catalog): State<SharedCatalog>,
) -> Result<Json<serde_json::Value>, CatalogError> {
    let movies = catalog.store().len()?;
    Ok(Json(json!({ "ok": true, "movies": movies })))
}

/// `POST /movies/`
async fn create_handler(
    State(catalog): State<SharedCatalog>,
    body: Result<Json<MovieInput>, JsonRejection>,
) -> Result<(StatusCode, Json<MovieView>), CatalogError> {
    let Json(input) = body.map_err(|e| malformed("body", e.body_text()))?;
    let view = catalog.create(input)?;
    Ok((StatusCode::CREATED, Json(view)))
}

/// `GET /movies/{id}`
async fn get_handler(
    State(catalog): State<SharedCatalog>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<MovieView>, CatalogError> {
    let Path(id) = id.map_err(|e| malformed("id", e.body_text()))?;
    Ok(Json(catalog.get(id)?))
}

/// `GET /movies/`
async fn list_handler(
    State(catalog): State<SharedCatalog>,
    params: Result<Query<FilterParams>, QueryRejection>,
) -> Result<Json<Vec<MovieView>>, CatalogError> {
    let Query(params) = params.map_err(|e| malformed("query", e.body_text()))?;
    Ok(Json(catalog.list(&params)?))
}

/// `DELETE /movies/{id}`
async fn delete_handler(
    State(catalog): State<SharedCatalog>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, CatalogError> {
    let Path(id) = id.map_err(|e| malformed("id", e.body_text()))?;
    catalog.delete(id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// `GET /movies/top/`
async fn top_rated_handler(
    State(catalog): State<SharedCatalog>,
    params: Result<Query<TopRatedParams>, QueryRejection>,
) -> Result<Json<Vec<MovieView>>, CatalogError> {
    let Query(params) = params.map_err(|e| malformed("query", e.body_text()))?;
    Ok(Json(catalog.top_rated(&params)?))
}
