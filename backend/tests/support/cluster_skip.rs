//! Skip policy for suites that need an embedded PostgreSQL cluster.
//!
//! A cluster that cannot start fails the test unless `SKIP_TEST_CLUSTER` is
//! truthy, in which case the test prints a skip marker and returns early.

const SKIP_ENV: &str = "SKIP_TEST_CLUSTER";

/// Returns true when `SKIP_TEST_CLUSTER` is "1", "true" or "yes"
/// (case-insensitive).
pub fn should_skip_test_cluster() -> bool {
    std::env::var(SKIP_ENV)
        .map(|value| matches!(value.to_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

/// Report a cluster setup failure.
///
/// Returns `None` after printing `SKIP-TEST-CLUSTER` when skipping is
/// allowed, and panics otherwise.
pub fn handle_cluster_setup_failure<T>(reason: impl std::fmt::Display) -> Option<T> {
    if should_skip_test_cluster() {
        eprintln!("SKIP-TEST-CLUSTER: {reason}");
        None
    } else {
        panic!("embedded PostgreSQL setup failed: {reason}. Set {SKIP_ENV}=1 to skip.");
    }
}
