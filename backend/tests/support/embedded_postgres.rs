//! Temporary PostgreSQL databases for the Diesel adapter tests.
//!
//! All suites in one test binary share a single embedded cluster. Each test
//! gets its own database on it, migrated with the service's embedded
//! migrations so the schema under test is the one the server applies.

use std::time::Duration;

use cart_backend::outbound::persistence::run_pending_migrations;
use pg_embedded_setup_unpriv::test_support::shared_cluster_handle;
use pg_embedded_setup_unpriv::{ClusterHandle, TemporaryDatabase};
use tokio::runtime::Runtime;

const CLUSTER_RETRIES: usize = 5;
const CLUSTER_RETRY_DELAY: Duration = Duration::from_millis(500);

fn shared_cluster() -> Result<&'static ClusterHandle, String> {
    let mut attempt = 1;
    loop {
        match shared_cluster_handle() {
            Ok(handle) => return Ok(handle),
            Err(error) if attempt >= CLUSTER_RETRIES => {
                return Err(format!("start shared cluster: {error:?}"));
            }
            Err(_) => {
                std::thread::sleep(CLUSTER_RETRY_DELAY);
                attempt += 1;
            }
        }
    }
}

/// Create a temporary database and apply every pending migration to it.
///
/// The database is dropped together with the returned handle.
pub fn provision_migrated_database(runtime: &Runtime) -> Result<TemporaryDatabase, String> {
    let name = format!("cart_test_{}", uuid::Uuid::new_v4().simple());
    let database = shared_cluster()?
        .temporary_database(name.as_str())
        .map_err(|err| format!("create temporary database: {err:?}"))?;
    let url = database.url().to_string();

    let applied = runtime
        .block_on(run_pending_migrations(&url))
        .map_err(|err| err.to_string())?;
    if applied == 0 {
        return Err("a fresh database applied no migrations".to_owned());
    }
    Ok(database)
}
