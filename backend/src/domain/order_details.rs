//! Order details entity.
//!
//! Only identity is modelled; the resource exposes the generic CRUD surface
//! without field-level content.

use super::entity::{Entity, EntityId};

/// Persisted order details record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderDetails {
    id: EntityId,
}

impl OrderDetails {
    /// Build a record for the given identifier.
    pub fn new(id: EntityId) -> Self {
        Self { id }
    }
}

/// Unsaved order details. Carries no fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NewOrderDetails;

/// Partial update of order details. Carries no fields, so applying it is a no-op.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrderDetailsPatch;

impl Entity for OrderDetails {
    const NAME: &'static str = "orderDetails";

    type Draft = NewOrderDetails;
    type Patch = OrderDetailsPatch;

    fn id(&self) -> EntityId {
        self.id
    }

    fn from_draft(id: EntityId, _draft: NewOrderDetails) -> Self {
        Self::new(id)
    }

    fn apply_patch(&mut self, _patch: OrderDetailsPatch) {}
}
