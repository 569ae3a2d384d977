//! Shared helpers for backend integration tests.
//!
//! Each file under `tests/` is its own crate, so suites that need these
//! helpers declare `mod support;` and pick what they use.

pub mod cluster_skip;
pub mod embedded_postgres;

pub use cluster_skip::handle_cluster_setup_failure;
pub use embedded_postgres::provision_migrated_database;
