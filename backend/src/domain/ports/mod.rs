//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod entity_resource;
mod entity_store;
mod in_memory_entity_store;

pub use entity_resource::EntityResource;
#[cfg(test)]
pub use entity_store::MockEntityStore;
pub use entity_store::{EntityPersistenceError, EntityStore, UnitOfWork};
pub use in_memory_entity_store::InMemoryEntityStore;
