//! PostgreSQL-backed implementation of the entity store port.
//!
//! Each unit of work owns one pooled connection for its lifetime and holds a
//! database transaction open on it. Per-entity query implementations live in
//! sibling modules.

use std::marker::PhantomData;

use async_trait::async_trait;
use diesel_async::{AnsiTransactionManager, AsyncPgConnection, TransactionManager};
use tracing::debug;

use crate::domain::Entity;
use crate::domain::ports::{EntityPersistenceError, EntityStore, UnitOfWork};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::pool::{DbPool, OwnedConnection};

/// Diesel-backed entity store for `E`.
///
/// Available for every entity whose [`DieselUnitOfWork`] implements
/// [`UnitOfWork`].
pub struct DieselEntityStore<E> {
    pool: DbPool,
    _entity: PhantomData<fn() -> E>,
}

impl<E> DieselEntityStore<E> {
    /// Create a store over the given pool.
    pub fn new(pool: DbPool) -> Self {
        Self {
            pool,
            _entity: PhantomData,
        }
    }
}

impl<E> Clone for DieselEntityStore<E> {
    fn clone(&self) -> Self {
        Self::new(self.pool.clone())
    }
}

#[async_trait]
impl<E> EntityStore<E> for DieselEntityStore<E>
where
    E: Entity,
    DieselUnitOfWork<E>: UnitOfWork<E>,
{
    async fn begin(&self) -> Result<Box<dyn UnitOfWork<E>>, EntityPersistenceError> {
        let unit = DieselUnitOfWork::<E>::begin(&self.pool).await?;
        Ok(Box::new(unit))
    }
}

/// One open database transaction scoped to entity type `E`.
///
/// Dropping an unfinished unit of work returns a connection with an open
/// transaction, which the pool discards instead of reusing, so the
/// transaction is rolled back by the server.
pub struct DieselUnitOfWork<E> {
    conn: OwnedConnection,
    _entity: PhantomData<fn() -> E>,
}

impl<E> DieselUnitOfWork<E> {
    async fn begin(pool: &DbPool) -> Result<Self, EntityPersistenceError> {
        let mut conn = pool.get_owned().await.map_err(map_pool_error)?;
        AnsiTransactionManager::begin_transaction(&mut *conn)
            .await
            .map_err(|err| map_diesel_error(err, "begin transaction"))?;
        Ok(Self {
            conn,
            _entity: PhantomData,
        })
    }

    /// Connection with the open transaction.
    pub(crate) fn conn(&mut self) -> &mut AsyncPgConnection {
        &mut self.conn
    }

    pub(crate) async fn commit_transaction(mut self) -> Result<(), EntityPersistenceError> {
        AnsiTransactionManager::commit_transaction(&mut *self.conn)
            .await
            .map_err(|err| map_diesel_error(err, "commit transaction"))?;
        debug!("transaction committed");
        Ok(())
    }

    pub(crate) async fn rollback_transaction(mut self) -> Result<(), EntityPersistenceError> {
        AnsiTransactionManager::rollback_transaction(&mut *self.conn)
            .await
            .map_err(|err| map_diesel_error(err, "rollback transaction"))?;
        debug!("transaction rolled back");
        Ok(())
    }
}
