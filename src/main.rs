//! movie-catalog server.
//!
//! Serves one in-memory catalog over HTTP. See `movie_catalog::http` for the
//! routes and `movie_catalog::config::Config` for the options.
//!
//! Build and run: `cargo run --bin movie-catalog -- --seed starter`

use std::sync::Arc;

use clap::Parser;

use movie_catalog::config::Config;
use movie_catalog::{http, Catalog};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::parse();
    let catalog = Arc::new(Catalog::new(config.seed.build_store()));

    tracing::info!(seed = ?config.seed, "movie catalog initialized");

    if let Err(e) = http::serve(catalog, &config.bind).await {
        tracing::error!("server error on {}: {e}", config.bind);
        std::process::exit(1);
    }
}
