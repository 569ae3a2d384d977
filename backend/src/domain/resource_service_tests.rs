//! Tests for the generic resource service.

use std::sync::{Arc, Mutex};

use rstest::{fixture, rstest};

use super::*;
use crate::domain::ports::{InMemoryEntityStore, MockEntityStore};
use crate::domain::{ErrorCode, FieldUpdate, User, UserDraft, UserPatch};

/// Outcome of each finished unit of work, in order.
type Journal = Arc<Mutex<Vec<&'static str>>>;

/// Wraps the in-memory store and records how each unit of work ended.
struct JournalingStore {
    inner: InMemoryEntityStore<User>,
    journal: Journal,
    fail_saves: bool,
}

#[async_trait]
impl EntityStore<User> for JournalingStore {
    async fn begin(&self) -> Result<Box<dyn UnitOfWork<User>>, EntityPersistenceError> {
        let inner = self.inner.begin().await?;
        Ok(Box::new(JournalingUnitOfWork {
            inner,
            journal: Arc::clone(&self.journal),
            fail_saves: self.fail_saves,
        }))
    }
}

struct JournalingUnitOfWork {
    inner: Box<dyn UnitOfWork<User>>,
    journal: Journal,
    fail_saves: bool,
}

impl JournalingUnitOfWork {
    fn record(&self, outcome: &'static str) {
        self.journal.lock().expect("journal lock").push(outcome);
    }
}

#[async_trait]
impl UnitOfWork<User> for JournalingUnitOfWork {
    async fn insert(&mut self, draft: &UserDraft) -> Result<User, EntityPersistenceError> {
        self.inner.insert(draft).await
    }

    async fn save(&mut self, entity: &User) -> Result<User, EntityPersistenceError> {
        if self.fail_saves {
            return Err(EntityPersistenceError::query("disk full"));
        }
        self.inner.save(entity).await
    }

    async fn find_by_id(&mut self, id: EntityId) -> Result<Option<User>, EntityPersistenceError> {
        self.inner.find_by_id(id).await
    }

    async fn find_all(&mut self) -> Result<Vec<User>, EntityPersistenceError> {
        self.inner.find_all().await
    }

    async fn exists_by_id(&mut self, id: EntityId) -> Result<bool, EntityPersistenceError> {
        self.inner.exists_by_id(id).await
    }

    async fn delete_by_id(&mut self, id: EntityId) -> Result<bool, EntityPersistenceError> {
        self.inner.delete_by_id(id).await
    }

    async fn commit(self: Box<Self>) -> Result<(), EntityPersistenceError> {
        self.record("commit");
        self.inner.commit().await
    }

    async fn rollback(self: Box<Self>) -> Result<(), EntityPersistenceError> {
        self.record("rollback");
        self.inner.rollback().await
    }
}

struct Harness {
    service: ResourceService<User>,
    journal: Journal,
}

impl Harness {
    fn with_failing_saves(fail_saves: bool) -> Self {
        let journal = Journal::default();
        let store = JournalingStore {
            inner: InMemoryEntityStore::new(),
            journal: Arc::clone(&journal),
            fail_saves,
        };
        Self {
            service: ResourceService::new(Arc::new(store)),
            journal,
        }
    }

    fn outcomes(&self) -> Vec<&'static str> {
        self.journal.lock().expect("journal lock").clone()
    }

    async fn seed(&self, draft: UserDraft) -> User {
        let user = self
            .service
            .create(Submission::new(None, draft))
            .await
            .expect("seed user");
        self.journal.lock().expect("journal lock").clear();
        user
    }
}

#[fixture]
fn harness() -> Harness {
    Harness::with_failing_saves(false)
}

fn ada() -> UserDraft {
    UserDraft {
        name: Some("Ada".to_owned()),
        email: Some("ada@example.com".to_owned()),
        password: Some("analytical".to_owned()),
        birth: chrono::NaiveDate::from_ymd_opt(1815, 12, 10),
    }
}

fn alert_of(error: &Error) -> Option<AlertReason> {
    BadRequestAlert::from_error(error).map(|alert| alert.reason)
}

fn untouched_store() -> ResourceService<User> {
    let mut store = MockEntityStore::<User>::new();
    store.expect_begin().never();
    ResourceService::new(Arc::new(store))
}

#[rstest]
#[tokio::test]
async fn create_assigns_identifier_and_commits(harness: Harness) {
    let created = harness
        .service
        .create(Submission::new(None, ada()))
        .await
        .expect("create succeeds");

    assert!(created.id().get() > 0);
    assert_eq!(created.details(), &ada());
    assert_eq!(harness.outcomes(), vec!["commit"]);
}

#[rstest]
#[case(EntityId::new(1))]
#[case(EntityId::new(0))]
#[case(EntityId::new(-5))]
#[tokio::test]
async fn create_rejects_any_supplied_identifier(#[case] id: EntityId) {
    let err = untouched_store()
        .create(Submission::new(Some(id), ada()))
        .await
        .expect_err("id present");

    assert_eq!(err.code(), ErrorCode::InvalidRequest);
    assert_eq!(alert_of(&err), Some(AlertReason::IdExists));
    assert_eq!(err.message(), "A new users cannot already have an ID");
}

#[rstest]
#[case(None, AlertReason::IdNull)]
#[case(Some(EntityId::new(8)), AlertReason::IdInvalid)]
#[tokio::test]
async fn update_validates_identity_before_opening_a_transaction(
    #[case] body_id: Option<EntityId>,
    #[case] expected: AlertReason,
) {
    let err = untouched_store()
        .update(EntityId::new(7), Submission::new(body_id, ada()))
        .await
        .expect_err("identity mismatch");

    assert_eq!(alert_of(&err), Some(expected));
}

#[rstest]
#[case(None, AlertReason::IdNull)]
#[case(Some(EntityId::new(8)), AlertReason::IdInvalid)]
#[tokio::test]
async fn partial_update_validates_identity_before_opening_a_transaction(
    #[case] body_id: Option<EntityId>,
    #[case] expected: AlertReason,
) {
    let err = untouched_store()
        .partial_update(EntityId::new(7), Submission::new(body_id, UserPatch::default()))
        .await
        .expect_err("identity mismatch");

    assert_eq!(alert_of(&err), Some(expected));
}

#[rstest]
#[tokio::test]
async fn update_of_unknown_record_is_idnotfound_and_rolls_back(harness: Harness) {
    let id = EntityId::new(404);
    let err = harness
        .service
        .update(id, Submission::new(Some(id), ada()))
        .await
        .expect_err("unknown record");

    assert_eq!(alert_of(&err), Some(AlertReason::IdNotFound));
    assert_eq!(harness.outcomes(), vec!["rollback"]);
}

#[rstest]
#[tokio::test]
async fn update_replaces_every_field(harness: Harness) {
    let stored = harness.seed(ada()).await;
    let replacement = UserDraft {
        name: Some("Ada Lovelace".to_owned()),
        ..UserDraft::default()
    };

    let updated = harness
        .service
        .update(stored.id(), Submission::new(Some(stored.id()), replacement.clone()))
        .await
        .expect("update succeeds");

    assert_eq!(updated.details(), &replacement);
    assert!(updated.email().is_none());
    let reloaded = harness
        .service
        .get(stored.id())
        .await
        .expect("get succeeds")
        .expect("record exists");
    assert_eq!(reloaded, updated);
}

#[rstest]
#[tokio::test]
async fn partial_update_merges_supplied_fields(harness: Harness) {
    let stored = harness.seed(ada()).await;
    let patch = UserPatch {
        email: FieldUpdate::Set("countess@example.com".to_owned()),
        birth: FieldUpdate::Clear,
        ..UserPatch::default()
    };

    let merged = harness
        .service
        .partial_update(stored.id(), Submission::new(Some(stored.id()), patch))
        .await
        .expect("patch succeeds")
        .expect("record exists");

    assert_eq!(merged.name(), Some("Ada"));
    assert_eq!(merged.email(), Some("countess@example.com"));
    assert_eq!(merged.password(), Some("analytical"));
    assert!(merged.birth().is_none());
    assert_eq!(harness.outcomes(), vec!["commit"]);
}

#[rstest]
#[tokio::test]
async fn partial_update_of_unknown_record_is_absent(harness: Harness) {
    let id = EntityId::new(404);
    let result = harness
        .service
        .partial_update(id, Submission::new(Some(id), UserPatch::default()))
        .await
        .expect("absence is not an error");

    assert!(result.is_none());
}

#[rstest]
#[tokio::test]
async fn list_returns_records_in_identifier_order(harness: Harness) {
    let first = harness.seed(ada()).await;
    let second = harness.seed(UserDraft::default()).await;

    let all = harness.service.list().await.expect("list succeeds");

    let ids: Vec<_> = all.iter().map(|user| user.id()).collect();
    assert_eq!(ids, vec![first.id(), second.id()]);
}

#[rstest]
#[tokio::test]
async fn delete_is_idempotent(harness: Harness) {
    let stored = harness.seed(ada()).await;

    harness.service.delete(stored.id()).await.expect("delete");
    harness.service.delete(stored.id()).await.expect("delete again");

    assert!(harness.service.get(stored.id()).await.expect("get").is_none());
    assert_eq!(harness.outcomes(), vec!["commit", "commit", "commit"]);
}

#[rstest]
#[tokio::test]
async fn query_failures_roll_back_and_surface_as_internal() {
    let harness = Harness::with_failing_saves(true);
    let stored = harness.seed(ada()).await;

    let err = harness
        .service
        .update(stored.id(), Submission::new(Some(stored.id()), ada()))
        .await
        .expect_err("save fails");

    assert_eq!(err.code(), ErrorCode::InternalError);
    assert_eq!(harness.outcomes(), vec!["rollback"]);
}

#[rstest]
#[tokio::test]
async fn unavailable_store_surfaces_as_service_unavailable() {
    let mut store = MockEntityStore::<User>::new();
    store
        .expect_begin()
        .times(1)
        .returning(|| Err(EntityPersistenceError::connection("connection refused")));
    let service = ResourceService::new(Arc::new(store));

    let err = service.list().await.expect_err("store down");

    assert_eq!(err.code(), ErrorCode::ServiceUnavailable);
}
