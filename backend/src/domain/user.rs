//! User account entity.

use std::fmt;

use chrono::NaiveDate;

use super::entity::{Entity, EntityId, FieldUpdate};

/// Field values of a user, without identity.
///
/// Every field is optional; the resource performs no content validation.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct UserDraft {
    /// Full name.
    pub name: Option<String>,
    /// Contact email address.
    pub email: Option<String>,
    /// Account password as supplied by the client.
    pub password: Option<String>,
    /// Date of birth.
    pub birth: Option<NaiveDate>,
}

impl fmt::Debug for UserDraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserDraft")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("birth", &self.birth)
            .finish()
    }
}

/// Persisted user.
///
/// ## Invariants
/// - `id` was assigned by the store and never changes.
#[derive(Clone, PartialEq, Eq)]
pub struct User {
    id: EntityId,
    details: UserDraft,
}

impl User {
    /// Build a user from an identifier and its field values.
    pub fn new(id: EntityId, details: UserDraft) -> Self {
        Self { id, details }
    }

    /// Field values.
    pub fn details(&self) -> &UserDraft {
        &self.details
    }

    /// Consume the user, keeping its field values.
    pub fn into_details(self) -> UserDraft {
        self.details
    }

    /// Full name.
    pub fn name(&self) -> Option<&str> {
        self.details.name.as_deref()
    }

    /// Contact email address.
    pub fn email(&self) -> Option<&str> {
        self.details.email.as_deref()
    }

    /// Account password.
    pub fn password(&self) -> Option<&str> {
        self.details.password.as_deref()
    }

    /// Date of birth.
    pub fn birth(&self) -> Option<NaiveDate> {
        self.details.birth
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("details", &self.details)
            .finish()
    }
}

/// Partial update of a user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    /// New name, if supplied.
    pub name: FieldUpdate<String>,
    /// New email, if supplied.
    pub email: FieldUpdate<String>,
    /// New password, if supplied.
    pub password: FieldUpdate<String>,
    /// New date of birth, if supplied.
    pub birth: FieldUpdate<NaiveDate>,
}

impl Entity for User {
    const NAME: &'static str = "users";

    type Draft = UserDraft;
    type Patch = UserPatch;

    fn id(&self) -> EntityId {
        self.id
    }

    fn from_draft(id: EntityId, draft: UserDraft) -> Self {
        Self::new(id, draft)
    }

    fn apply_patch(&mut self, patch: UserPatch) {
        let UserPatch {
            name,
            email,
            password,
            birth,
        } = patch;
        name.apply_to(&mut self.details.name);
        email.apply_to(&mut self.details.email);
        password.apply_to(&mut self.details.password);
        birth.apply_to(&mut self.details.birth);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn ada() -> User {
        User::new(
            EntityId::new(1),
            UserDraft {
                name: Some("Ada".to_owned()),
                email: Some("ada@example.com".to_owned()),
                password: Some("analytical".to_owned()),
                birth: NaiveDate::from_ymd_opt(1815, 12, 10),
            },
        )
    }

    #[rstest]
    fn patch_overwrites_only_supplied_fields(mut ada: User) {
        ada.apply_patch(UserPatch {
            email: FieldUpdate::Set("countess@example.com".to_owned()),
            birth: FieldUpdate::Clear,
            ..UserPatch::default()
        });

        assert_eq!(ada.name(), Some("Ada"));
        assert_eq!(ada.email(), Some("countess@example.com"));
        assert_eq!(ada.password(), Some("analytical"));
        assert_eq!(ada.birth(), None);
        assert_eq!(ada.id(), EntityId::new(1));
    }

    #[rstest]
    fn empty_patch_is_identity(ada: User) {
        let mut patched = ada.clone();
        patched.apply_patch(UserPatch::default());
        assert_eq!(patched, ada);
    }

    #[rstest]
    fn debug_output_redacts_password(ada: User) {
        let rendered = format!("{ada:?}");
        assert!(!rendered.contains("analytical"));
        assert!(rendered.contains("<redacted>"));
    }
}
