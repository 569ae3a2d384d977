//! Driving port for the CRUD operations of one resource.
//!
//! Inbound adapters depend on this port only, so handlers stay testable
//! without a database.

use async_trait::async_trait;

use crate::domain::{Entity, EntityId, Error, Submission};

/// Use-case port for managing one entity type.
#[async_trait]
pub trait EntityResource<E: Entity>: Send + Sync {
    /// Persist a new record. Fails with `idexists` when an id was supplied.
    async fn create(&self, submission: Submission<E::Draft>) -> Result<E, Error>;

    /// Replace an existing record.
    ///
    /// Fails with `idnull`, `idinvalid`, or `idnotfound`.
    async fn update(&self, id: EntityId, submission: Submission<E::Draft>) -> Result<E, Error>;

    /// Merge the supplied fields into an existing record.
    ///
    /// Fails with `idnull` or `idinvalid`; returns `Ok(None)` when no record
    /// matches.
    async fn partial_update(
        &self,
        id: EntityId,
        submission: Submission<E::Patch>,
    ) -> Result<Option<E>, Error>;

    /// Every stored record.
    async fn list(&self) -> Result<Vec<E>, Error>;

    /// One record, or `None` when absent.
    async fn get(&self, id: EntityId) -> Result<Option<E>, Error>;

    /// Remove a record; succeeds whether or not it existed.
    async fn delete(&self, id: EntityId) -> Result<(), Error>;
}
