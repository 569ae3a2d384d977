//! Driven port for entity persistence inside an explicit transaction scope.
//!
//! An [`EntityStore`] hands out [`UnitOfWork`] guards. All reads and writes of
//! one resource operation go through a single unit of work, which the caller
//! must finish with [`UnitOfWork::commit`] or [`UnitOfWork::rollback`]. A unit
//! of work dropped without commit never publishes its changes.

use async_trait::async_trait;

use crate::domain::{Entity, EntityId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by entity store adapters.
    pub enum EntityPersistenceError {
        /// Store connection could not be established.
        Connection { message: String } => "entity store connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "entity store query failed: {message}",
    }
}

/// Factory for transactional units of work over one entity type.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EntityStore<E: Entity>: Send + Sync {
    /// Open a transaction.
    async fn begin(&self) -> Result<Box<dyn UnitOfWork<E>>, EntityPersistenceError>;
}

/// Repository operations scoped to one open transaction.
#[async_trait]
pub trait UnitOfWork<E: Entity>: Send {
    /// Persist a new record; the store assigns its identifier.
    async fn insert(&mut self, draft: &E::Draft) -> Result<E, EntityPersistenceError>;

    /// Overwrite an existing record with every field of `entity`.
    async fn save(&mut self, entity: &E) -> Result<E, EntityPersistenceError>;

    /// Fetch a record by identifier.
    async fn find_by_id(&mut self, id: EntityId) -> Result<Option<E>, EntityPersistenceError>;

    /// Fetch every record, ordered by identifier.
    async fn find_all(&mut self) -> Result<Vec<E>, EntityPersistenceError>;

    /// Report whether a record with `id` exists.
    async fn exists_by_id(&mut self, id: EntityId) -> Result<bool, EntityPersistenceError>;

    /// Remove a record. Returns `false` when nothing matched.
    async fn delete_by_id(&mut self, id: EntityId) -> Result<bool, EntityPersistenceError>;

    /// Publish all changes made through this unit of work.
    async fn commit(self: Box<Self>) -> Result<(), EntityPersistenceError>;

    /// Discard all changes made through this unit of work.
    async fn rollback(self: Box<Self>) -> Result<(), EntityPersistenceError>;
}
