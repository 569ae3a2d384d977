//! Diesel queries for the order_details table.

use async_trait::async_trait;
use diesel::dsl::exists;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{EntityPersistenceError, UnitOfWork};
use crate::domain::{Entity, EntityId, NewOrderDetails, OrderDetails};

use super::diesel_entity_store::DieselUnitOfWork;
use super::diesel_error_mapping::map_diesel_error;
use super::models::OrderDetailsRow;
use super::schema::order_details;

#[async_trait]
impl UnitOfWork<OrderDetails> for DieselUnitOfWork<OrderDetails> {
    async fn insert(
        &mut self,
        _draft: &NewOrderDetails,
    ) -> Result<OrderDetails, EntityPersistenceError> {
        let id: i64 = diesel::insert_into(order_details::table)
            .default_values()
            .returning(order_details::id)
            .get_result(self.conn())
            .await
            .map_err(|err| map_diesel_error(err, "insert order details"))?;
        Ok(OrderDetails::new(EntityId::new(id)))
    }

    // No columns besides the key, so saving only confirms the row is there.
    async fn save(&mut self, entity: &OrderDetails) -> Result<OrderDetails, EntityPersistenceError> {
        let row: OrderDetailsRow = order_details::table
            .find(entity.id().get())
            .select(OrderDetailsRow::as_select())
            .first(self.conn())
            .await
            .map_err(|err| map_diesel_error(err, "update order details"))?;
        Ok(row.into())
    }

    async fn find_by_id(
        &mut self,
        id: EntityId,
    ) -> Result<Option<OrderDetails>, EntityPersistenceError> {
        let row: Option<OrderDetailsRow> = order_details::table
            .find(id.get())
            .select(OrderDetailsRow::as_select())
            .first(self.conn())
            .await
            .optional()
            .map_err(|err| map_diesel_error(err, "find order details"))?;
        Ok(row.map(OrderDetails::from))
    }

    async fn find_all(&mut self) -> Result<Vec<OrderDetails>, EntityPersistenceError> {
        let rows: Vec<OrderDetailsRow> = order_details::table
            .order(order_details::id.asc())
            .select(OrderDetailsRow::as_select())
            .load(self.conn())
            .await
            .map_err(|err| map_diesel_error(err, "list order details"))?;
        Ok(rows.into_iter().map(OrderDetails::from).collect())
    }

    async fn exists_by_id(&mut self, id: EntityId) -> Result<bool, EntityPersistenceError> {
        diesel::select(exists(order_details::table.find(id.get())))
            .get_result(self.conn())
            .await
            .map_err(|err| map_diesel_error(err, "check order details exist"))
    }

    async fn delete_by_id(&mut self, id: EntityId) -> Result<bool, EntityPersistenceError> {
        let deleted = diesel::delete(order_details::table.find(id.get()))
            .execute(self.conn())
            .await
            .map_err(|err| map_diesel_error(err, "delete order details"))?;
        Ok(deleted > 0)
    }

    async fn commit(self: Box<Self>) -> Result<(), EntityPersistenceError> {
        (*self).commit_transaction().await
    }

    async fn rollback(self: Box<Self>) -> Result<(), EntityPersistenceError> {
        (*self).rollback_transaction().await
    }
}
