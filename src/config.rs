//! Process configuration for the `movie-catalog` binary.
//!
//! Every option can come from the command line or the environment.

use clap::{Parser, ValueEnum};

use crate::store::MovieStore;

pub const DEFAULT_BIND: &str = "127.0.0.1:8000";

/// What the collection holds at startup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Seed {
    /// The two starter records (Matrix, Inception).
    #[default]
    Starter,
    /// No records.
    Empty,
}

impl Seed {
    pub fn build_store(self) -> MovieStore {
        match self {
            Seed::Starter => MovieStore::starter(),
            Seed::Empty => MovieStore::new(),
        }
    }
}

#[derive(Clone, Debug, Parser)]
#[command(name = "movie-catalog", version, about = "In-memory movie catalog over HTTP")]
pub struct Config {
    /// Address to listen on.
    #[arg(long, env = "MOVIE_CATALOG_BIND", default_value = DEFAULT_BIND)]
    pub bind: String,

    /// Initial contents of the catalog.
    #[arg(long, env = "MOVIE_CATALOG_SEED", value_enum, default_value_t = Seed::Starter)]
    pub seed: Seed,
}
