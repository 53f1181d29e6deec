//! Catalog integration tests.

mod operations;
