//! Diesel queries for the users table.

use async_trait::async_trait;
use diesel::dsl::exists;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{EntityPersistenceError, UnitOfWork};
use crate::domain::{Entity, EntityId, User, UserDraft};

use super::diesel_entity_store::DieselUnitOfWork;
use super::diesel_error_mapping::map_diesel_error;
use super::models::{UserRow, UserValues};
use super::schema::users;

#[async_trait]
impl UnitOfWork<User> for DieselUnitOfWork<User> {
    async fn insert(&mut self, draft: &UserDraft) -> Result<User, EntityPersistenceError> {
        let row: UserRow = diesel::insert_into(users::table)
            .values(UserValues::from(draft))
            .returning(UserRow::as_returning())
            .get_result(self.conn())
            .await
            .map_err(|err| map_diesel_error(err, "insert user"))?;
        Ok(row.into())
    }

    async fn save(&mut self, entity: &User) -> Result<User, EntityPersistenceError> {
        let row: UserRow = diesel::update(users::table.find(entity.id().get()))
            .set(UserValues::from(entity.details()))
            .returning(UserRow::as_returning())
            .get_result(self.conn())
            .await
            .map_err(|err| map_diesel_error(err, "update user"))?;
        Ok(row.into())
    }

    async fn find_by_id(&mut self, id: EntityId) -> Result<Option<User>, EntityPersistenceError> {
        let row: Option<UserRow> = users::table
            .find(id.get())
            .select(UserRow::as_select())
            .first(self.conn())
            .await
            .optional()
            .map_err(|err| map_diesel_error(err, "find user"))?;
        Ok(row.map(User::from))
    }

    async fn find_all(&mut self) -> Result<Vec<User>, EntityPersistenceError> {
        let rows: Vec<UserRow> = users::table
            .order(users::id.asc())
            .select(UserRow::as_select())
            .load(self.conn())
            .await
            .map_err(|err| map_diesel_error(err, "list users"))?;
        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn exists_by_id(&mut self, id: EntityId) -> Result<bool, EntityPersistenceError> {
        diesel::select(exists(users::table.find(id.get())))
            .get_result(self.conn())
            .await
            .map_err(|err| map_diesel_error(err, "check user exists"))
    }

    async fn delete_by_id(&mut self, id: EntityId) -> Result<bool, EntityPersistenceError> {
        let deleted = diesel::delete(users::table.find(id.get()))
            .execute(self.conn())
            .await
            .map_err(|err| map_diesel_error(err, "delete user"))?;
        Ok(deleted > 0)
    }

    async fn commit(self: Box<Self>) -> Result<(), EntityPersistenceError> {
        (*self).commit_transaction().await
    }

    async fn rollback(self: Box<Self>) -> Result<(), EntityPersistenceError> {
        (*self).rollback_transaction().await
    }
}
