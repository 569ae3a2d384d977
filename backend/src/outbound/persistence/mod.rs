//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Implements the entity store port on PostgreSQL through `diesel-async` and
//! `bb8` connection pooling.
//!
//! - **Thin adapters**: query modules only translate between Diesel rows and
//!   domain entities.
//! - **Internal models**: row structs (`models.rs`) and table definitions
//!   (`schema.rs`) never leave this module.
//! - **Strongly typed errors**: database failures map to
//!   [`EntityPersistenceError`](crate::domain::ports::EntityPersistenceError)
//!   without leaking database messages.
//!
//! # Example
//!
//! ```no_run
//! use cart_backend::domain::User;
//! use cart_backend::outbound::persistence::{DbPool, DieselEntityStore, PoolConfig};
//!
//! # async fn build() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/cart")).await?;
//! let users = DieselEntityStore::<User>::new(pool);
//! # let _ = users;
//! # Ok(())
//! # }
//! ```

mod diesel_entity_store;
mod diesel_error_mapping;
mod diesel_order_details_queries;
mod diesel_user_queries;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_entity_store::{DieselEntityStore, DieselUnitOfWork};
pub use migrations::{MIGRATIONS, MigrationError, run_pending_migrations};
pub use pool::{DbPool, OwnedConnection, PoolConfig, PoolError};
