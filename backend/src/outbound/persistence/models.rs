//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain. They exist solely to satisfy Diesel's
//! type requirements for queries and mutations.

use chrono::NaiveDate;
use diesel::prelude::*;

use crate::domain::{EntityId, OrderDetails, User, UserDraft};

use super::schema::{order_details, users};

/// Row struct for reading from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: i64,
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub birth: Option<NaiveDate>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        let UserRow {
            id,
            name,
            email,
            password,
            birth,
        } = row;
        User::new(
            EntityId::new(id),
            UserDraft {
                name,
                email,
                password,
                birth,
            },
        )
    }
}

/// Column values written on insert and full replace.
///
/// `None` is written as `NULL` so a replace clears omitted fields.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = users)]
#[diesel(treat_none_as_null = true)]
pub(crate) struct UserValues<'a> {
    pub name: Option<&'a str>,
    pub email: Option<&'a str>,
    pub password: Option<&'a str>,
    pub birth: Option<NaiveDate>,
}

impl<'a> From<&'a UserDraft> for UserValues<'a> {
    fn from(draft: &'a UserDraft) -> Self {
        Self {
            name: draft.name.as_deref(),
            email: draft.email.as_deref(),
            password: draft.password.as_deref(),
            birth: draft.birth,
        }
    }
}

/// Row struct for reading from the order_details table.
#[derive(Debug, Clone, Copy, Queryable, Selectable)]
#[diesel(table_name = order_details)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct OrderDetailsRow {
    pub id: i64,
}

impl From<OrderDetailsRow> for OrderDetails {
    fn from(row: OrderDetailsRow) -> Self {
        OrderDetails::new(EntityId::new(row.id))
    }
}
