//! Shared Diesel error mapping for the entity store adapters.

use tracing::debug;

use crate::domain::ports::EntityPersistenceError;

use super::pool::PoolError;

/// Map pool errors into connection errors.
pub(crate) fn map_pool_error(error: PoolError) -> EntityPersistenceError {
    let message = match error {
        PoolError::Checkout { message } | PoolError::Build { message } => message,
    };
    EntityPersistenceError::connection(message)
}

/// Map Diesel errors into query or connection errors.
///
/// Database messages are logged at debug level and kept out of the returned
/// error so they never reach clients.
pub(crate) fn map_diesel_error(
    error: diesel::result::Error,
    operation: &'static str,
) -> EntityPersistenceError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), operation, "diesel operation failed");
        }
        _ => debug!(error = %error, operation, "diesel operation failed"),
    }

    match error {
        DieselError::NotFound => EntityPersistenceError::query(format!("{operation}: record not found")),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            EntityPersistenceError::connection(format!("{operation}: database connection error"))
        }
        DieselError::BrokenTransactionManager => {
            EntityPersistenceError::connection(format!("{operation}: broken transaction"))
        }
        _ => EntityPersistenceError::query(format!("{operation}: database error")),
    }
}
