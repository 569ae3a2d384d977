//! Generic CRUD service implementing [`EntityResource`] on top of an
//! [`EntityStore`].
//!
//! Every operation opens exactly one unit of work. Successful operations
//! commit it; any failure rolls it back before the error is returned.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::domain::ports::{EntityPersistenceError, EntityResource, EntityStore, UnitOfWork};
use crate::domain::{AlertReason, BadRequestAlert, Entity, EntityId, Error, Submission};

/// Resource service for one entity type.
pub struct ResourceService<E: Entity> {
    store: Arc<dyn EntityStore<E>>,
}

impl<E: Entity> Clone for ResourceService<E> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<E: Entity> ResourceService<E> {
    /// Create a service backed by `store`.
    pub fn new(store: Arc<dyn EntityStore<E>>) -> Self {
        Self { store }
    }

    fn map_persistence_error(error: EntityPersistenceError) -> Error {
        match error {
            EntityPersistenceError::Connection { message } => {
                Error::service_unavailable(format!("{} store unavailable: {message}", E::NAME))
            }
            EntityPersistenceError::Query { message } => {
                Error::internal(format!("{} store error: {message}", E::NAME))
            }
        }
    }

    fn alert(reason: AlertReason) -> Error {
        BadRequestAlert::error(E::NAME, reason)
    }

    fn check_identity(path_id: EntityId, body_id: Option<EntityId>) -> Result<EntityId, Error> {
        match body_id {
            None => Err(Self::alert(AlertReason::IdNull)),
            Some(id) if id != path_id => Err(Self::alert(AlertReason::IdInvalid)),
            Some(id) => Ok(id),
        }
    }

    async fn begin(&self) -> Result<Box<dyn UnitOfWork<E>>, Error> {
        self.store.begin().await.map_err(Self::map_persistence_error)
    }

    /// Commit on success, roll back on failure.
    async fn finish<T: Send>(
        uow: Box<dyn UnitOfWork<E>>,
        result: Result<T, Error>,
    ) -> Result<T, Error> {
        match result {
            Ok(value) => {
                uow.commit().await.map_err(Self::map_persistence_error)?;
                Ok(value)
            }
            Err(err) => {
                if let Err(rollback) = uow.rollback().await {
                    warn!(
                        entity = E::NAME,
                        kind = rollback.kind(),
                        error = %rollback,
                        "rollback failed"
                    );
                }
                Err(err)
            }
        }
    }

    async fn replace_existing(uow: &mut dyn UnitOfWork<E>, entity: E) -> Result<E, Error> {
        let found = uow
            .exists_by_id(entity.id())
            .await
            .map_err(Self::map_persistence_error)?;
        if !found {
            return Err(Self::alert(AlertReason::IdNotFound));
        }
        uow.save(&entity).await.map_err(Self::map_persistence_error)
    }

    async fn merge_existing(
        uow: &mut dyn UnitOfWork<E>,
        id: EntityId,
        patch: E::Patch,
    ) -> Result<Option<E>, Error> {
        let Some(mut entity) = uow
            .find_by_id(id)
            .await
            .map_err(Self::map_persistence_error)?
        else {
            return Ok(None);
        };
        entity.apply_patch(patch);
        uow.save(&entity)
            .await
            .map(Some)
            .map_err(Self::map_persistence_error)
    }
}

#[async_trait]
impl<E: Entity> EntityResource<E> for ResourceService<E> {
    async fn create(&self, submission: Submission<E::Draft>) -> Result<E, Error> {
        debug!(entity = E::NAME, body = ?submission.body, "REST request to save entity");
        if submission.id.is_some() {
            return Err(Self::alert(AlertReason::IdExists));
        }
        let mut uow = self.begin().await?;
        let result = uow
            .insert(&submission.body)
            .await
            .map_err(Self::map_persistence_error);
        Self::finish(uow, result).await
    }

    async fn update(&self, id: EntityId, submission: Submission<E::Draft>) -> Result<E, Error> {
        debug!(entity = E::NAME, %id, body = ?submission.body, "REST request to update entity");
        let id = Self::check_identity(id, submission.id)?;
        let mut uow = self.begin().await?;
        let entity = E::from_draft(id, submission.body);
        let result = Self::replace_existing(uow.as_mut(), entity).await;
        Self::finish(uow, result).await
    }

    async fn partial_update(
        &self,
        id: EntityId,
        submission: Submission<E::Patch>,
    ) -> Result<Option<E>, Error> {
        debug!(
            entity = E::NAME,
            %id,
            patch = ?submission.body,
            "REST request to partially update entity"
        );
        let id = Self::check_identity(id, submission.id)?;
        let mut uow = self.begin().await?;
        let result = Self::merge_existing(uow.as_mut(), id, submission.body).await;
        Self::finish(uow, result).await
    }

    async fn list(&self) -> Result<Vec<E>, Error> {
        debug!(entity = E::NAME, "REST request to get all entities");
        let mut uow = self.begin().await?;
        let result = uow.find_all().await.map_err(Self::map_persistence_error);
        Self::finish(uow, result).await
    }

    async fn get(&self, id: EntityId) -> Result<Option<E>, Error> {
        debug!(entity = E::NAME, %id, "REST request to get entity");
        let mut uow = self.begin().await?;
        let result = uow.find_by_id(id).await.map_err(Self::map_persistence_error);
        Self::finish(uow, result).await
    }

    async fn delete(&self, id: EntityId) -> Result<(), Error> {
        debug!(entity = E::NAME, %id, "REST request to delete entity");
        let mut uow = self.begin().await?;
        let result = uow
            .delete_by_id(id)
            .await
            .map(|_| ())
            .map_err(Self::map_persistence_error);
        Self::finish(uow, result).await
    }
}

#[cfg(test)]
#[path = "resource_service_tests.rs"]
mod tests;
