//! Process-local [`EntityStore`] used when no database is configured.
//!
//! Each unit of work holds the table lock for its whole lifetime, so
//! transactions are serialised. Reads go straight to the committed table; the
//! first write takes a staged copy, so a rollback (or a dropped unit of work)
//! leaves the table untouched. Identifiers come from a shared counter and are
//! never reused, even when the inserting transaction rolls back.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::domain::{Entity, EntityId};

use super::{EntityPersistenceError, EntityStore, UnitOfWork};

type Table<E> = BTreeMap<EntityId, E>;

/// In-memory entity table.
pub struct InMemoryEntityStore<E: Entity> {
    table: Arc<Mutex<Table<E>>>,
    next_id: Arc<AtomicI64>,
}

impl<E: Entity> InMemoryEntityStore<E> {
    /// Create an empty store whose first identifier is `1`.
    pub fn new() -> Self {
        Self {
            table: Arc::new(Mutex::new(BTreeMap::new())),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }
}

impl<E: Entity> Default for InMemoryEntityStore<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Entity> Clone for InMemoryEntityStore<E> {
    fn clone(&self) -> Self {
        Self {
            table: Arc::clone(&self.table),
            next_id: Arc::clone(&self.next_id),
        }
    }
}

impl<E: Entity> fmt::Debug for InMemoryEntityStore<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InMemoryEntityStore")
            .field("entity", &E::NAME)
            .field("next_id", &self.next_id.load(Ordering::Relaxed))
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl<E: Entity> EntityStore<E> for InMemoryEntityStore<E> {
    async fn begin(&self) -> Result<Box<dyn UnitOfWork<E>>, EntityPersistenceError> {
        Ok(Box::new(self.open().await))
    }
}

impl<E: Entity> InMemoryEntityStore<E> {
    async fn open(&self) -> InMemoryUnitOfWork<E> {
        InMemoryUnitOfWork {
            committed: Arc::clone(&self.table).lock_owned().await,
            staged: None,
            next_id: Arc::clone(&self.next_id),
        }
    }
}

struct InMemoryUnitOfWork<E: Entity> {
    committed: OwnedMutexGuard<Table<E>>,
    /// Copy of the table taken on the first write; `None` while read-only.
    staged: Option<Table<E>>,
    next_id: Arc<AtomicI64>,
}

impl<E: Entity> InMemoryUnitOfWork<E> {
    fn view(&self) -> &Table<E> {
        match &self.staged {
            Some(staged) => staged,
            None => &*self.committed,
        }
    }

    fn staged_mut(&mut self) -> &mut Table<E> {
        let committed = &self.committed;
        self.staged.get_or_insert_with(|| Table::<E>::clone(committed))
    }
}

#[async_trait]
impl<E: Entity> UnitOfWork<E> for InMemoryUnitOfWork<E> {
    async fn insert(&mut self, draft: &E::Draft) -> Result<E, EntityPersistenceError> {
        let id = EntityId::new(self.next_id.fetch_add(1, Ordering::Relaxed));
        let entity = E::from_draft(id, draft.clone());
        self.staged_mut().insert(id, entity.clone());
        Ok(entity)
    }

    async fn save(&mut self, entity: &E) -> Result<E, EntityPersistenceError> {
        if !self.view().contains_key(&entity.id()) {
            return Err(EntityPersistenceError::query(format!(
                "no {} row with id {}",
                E::NAME,
                entity.id()
            )));
        }
        self.staged_mut().insert(entity.id(), entity.clone());
        Ok(entity.clone())
    }

    async fn find_by_id(&mut self, id: EntityId) -> Result<Option<E>, EntityPersistenceError> {
        Ok(self.view().get(&id).cloned())
    }

    async fn find_all(&mut self) -> Result<Vec<E>, EntityPersistenceError> {
        Ok(self.view().values().cloned().collect())
    }

    async fn exists_by_id(&mut self, id: EntityId) -> Result<bool, EntityPersistenceError> {
        Ok(self.view().contains_key(&id))
    }

    async fn delete_by_id(&mut self, id: EntityId) -> Result<bool, EntityPersistenceError> {
        if !self.view().contains_key(&id) {
            return Ok(false);
        }
        Ok(self.staged_mut().remove(&id).is_some())
    }

    async fn commit(self: Box<Self>) -> Result<(), EntityPersistenceError> {
        let Self {
            mut committed,
            staged,
            ..
        } = *self;
        if let Some(staged) = staged {
            *committed = staged;
        }
        Ok(())
    }

    async fn rollback(self: Box<Self>) -> Result<(), EntityPersistenceError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{User, UserDraft};
    use rstest::{fixture, rstest};

    #[fixture]
    fn store() -> InMemoryEntityStore<User> {
        InMemoryEntityStore::new()
    }

    fn draft(name: &str) -> UserDraft {
        UserDraft {
            name: Some(name.to_owned()),
            ..UserDraft::default()
        }
    }

    #[rstest]
    #[tokio::test]
    async fn committed_inserts_are_visible_to_later_units(store: InMemoryEntityStore<User>) {
        let mut uow = store.begin().await.expect("begin");
        let ada = uow.insert(&draft("ada")).await.expect("insert");
        uow.commit().await.expect("commit");

        let mut reader = store.begin().await.expect("begin");
        let found = reader.find_by_id(ada.id()).await.expect("find");
        assert_eq!(found.as_ref().and_then(User::name), Some("ada"));
    }

    #[rstest]
    #[tokio::test]
    async fn rollback_discards_changes_but_not_identifiers(store: InMemoryEntityStore<User>) {
        let mut uow = store.begin().await.expect("begin");
        let discarded = uow.insert(&draft("ada")).await.expect("insert");
        uow.rollback().await.expect("rollback");

        let mut uow = store.begin().await.expect("begin");
        assert!(uow.find_all().await.expect("list").is_empty());
        let kept = uow.insert(&draft("grace")).await.expect("insert");
        uow.commit().await.expect("commit");

        assert!(kept.id() > discarded.id());
    }

    #[rstest]
    #[tokio::test]
    async fn dropped_unit_of_work_publishes_nothing(store: InMemoryEntityStore<User>) {
        {
            let mut uow = store.begin().await.expect("begin");
            uow.insert(&draft("ada")).await.expect("insert");
        }

        let mut uow = store.begin().await.expect("begin");
        assert!(uow.find_all().await.expect("list").is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn reads_do_not_copy_the_table(store: InMemoryEntityStore<User>) {
        let mut uow = store.begin().await.expect("begin");
        let ada = uow.insert(&draft("ada")).await.expect("insert");
        uow.commit().await.expect("commit");

        let mut reader = store.open().await;
        assert!(reader.find_by_id(ada.id()).await.expect("find").is_some());
        assert_eq!(reader.find_all().await.expect("list").len(), 1);
        assert!(reader.exists_by_id(ada.id()).await.expect("exists"));
        assert!(!reader.delete_by_id(EntityId::new(99)).await.expect("delete"));
        assert!(reader.staged.is_none(), "read-only work should not stage a copy");

        assert!(reader.delete_by_id(ada.id()).await.expect("delete"));
        assert!(reader.staged.is_some());
        assert!(reader.committed.contains_key(&ada.id()), "uncommitted delete");
    }

    #[rstest]
    #[tokio::test]
    async fn save_requires_an_existing_row(store: InMemoryEntityStore<User>) {
        let mut uow = store.begin().await.expect("begin");
        let ghost = User::new(EntityId::new(99), draft("ghost"));
        let err = uow.save(&ghost).await.expect_err("missing row");
        assert_eq!(err.kind(), "query");
    }

    #[rstest]
    #[tokio::test]
    async fn delete_reports_whether_a_row_matched(store: InMemoryEntityStore<User>) {
        let mut uow = store.begin().await.expect("begin");
        let ada = uow.insert(&draft("ada")).await.expect("insert");

        assert!(uow.delete_by_id(ada.id()).await.expect("delete"));
        assert!(!uow.delete_by_id(ada.id()).await.expect("delete again"));
        assert!(!uow.exists_by_id(ada.id()).await.expect("exists"));
    }
}
