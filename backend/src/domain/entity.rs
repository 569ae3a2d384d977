//! Shared vocabulary for persisted resources.
//!
//! Every REST resource is backed by a type implementing [`Entity`]. The trait
//! ties together the stored record, the unsaved draft accepted on create and
//! full replace, and the field-presence-aware patch accepted on partial
//! update. The generic resource service and stores only speak this trait.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Store-assigned identifier shared by all entities.
///
/// Identifiers are allocated by the store on first persistence and never
/// change afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(i64);

impl EntityId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Raw identifier value.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for EntityId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<EntityId> for i64 {
    fn from(value: EntityId) -> Self {
        value.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A persisted resource managed through the generic resource service.
pub trait Entity: Clone + fmt::Debug + Send + Sync + 'static {
    /// Resource name used in alerts and error details.
    const NAME: &'static str;

    /// Unsaved field values, without an identifier.
    type Draft: Clone + fmt::Debug + Send + Sync + 'static;

    /// Partial update where each field may be left unchanged.
    type Patch: fmt::Debug + Send + Sync + 'static;

    /// Store-assigned identifier.
    fn id(&self) -> EntityId;

    /// Combine an identifier with draft values into a full record.
    fn from_draft(id: EntityId, draft: Self::Draft) -> Self;

    /// Overwrite the fields present in `patch`, leaving the rest untouched.
    fn apply_patch(&mut self, patch: Self::Patch);
}

/// A request body paired with the identifier it carried, if any.
///
/// Resource handlers receive records whose `id` may or may not be set; the
/// service decides whether that is acceptable for the operation at hand.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission<T> {
    /// Identifier supplied in the body.
    pub id: Option<EntityId>,
    /// Remaining field values.
    pub body: T,
}

impl<T> Submission<T> {
    /// Pair a body with an optional identifier.
    pub fn new(id: Option<EntityId>, body: T) -> Self {
        Self { id, body }
    }
}

/// Tri-state update for one optional field of a partial update.
///
/// Distinguishes a field that was not supplied from one explicitly cleared.
///
/// # Examples
/// ```
/// use cart_backend::domain::FieldUpdate;
///
/// let mut email = Some("old@example.com".to_owned());
/// FieldUpdate::Unchanged.apply_to(&mut email);
/// assert_eq!(email.as_deref(), Some("old@example.com"));
///
/// FieldUpdate::Set("new@example.com".to_owned()).apply_to(&mut email);
/// assert_eq!(email.as_deref(), Some("new@example.com"));
///
/// FieldUpdate::<String>::Clear.apply_to(&mut email);
/// assert!(email.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FieldUpdate<T> {
    /// Field absent from the request; keep the stored value.
    #[default]
    Unchanged,
    /// Field explicitly set to null.
    Clear,
    /// Field set to a new value.
    Set(T),
}

impl<T> FieldUpdate<T> {
    /// Write this update into `slot`.
    pub fn apply_to(self, slot: &mut Option<T>) {
        match self {
            Self::Unchanged => {}
            Self::Clear => *slot = None,
            Self::Set(value) => *slot = Some(value),
        }
    }
}

impl<T> From<Option<Option<T>>> for FieldUpdate<T> {
    fn from(value: Option<Option<T>>) -> Self {
        match value {
            None => Self::Unchanged,
            Some(None) => Self::Clear,
            Some(Some(inner)) => Self::Set(inner),
        }
    }
}
