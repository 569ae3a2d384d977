//! Builders for HTTP state from the configured persistence backend.

use std::sync::Arc;

use actix_web::web;
use tracing::warn;

use cart_backend::domain::ports::{EntityResource, EntityStore, InMemoryEntityStore};
use cart_backend::domain::{Entity, OrderDetails, ResourceService, User};
use cart_backend::inbound::http::state::HttpState;
use cart_backend::outbound::persistence::{DbPool, DieselEntityStore};

use super::ServerConfig;

/// Wrap a store in the resource service and erase it behind the driving port.
fn build_resource<E: Entity>(store: Arc<dyn EntityStore<E>>) -> Arc<dyn EntityResource<E>> {
    Arc::new(ResourceService::new(store))
}

fn diesel_resources(
    pool: &DbPool,
) -> (
    Arc<dyn EntityResource<User>>,
    Arc<dyn EntityResource<OrderDetails>>,
) {
    (
        build_resource::<User>(Arc::new(DieselEntityStore::new(pool.clone()))),
        build_resource::<OrderDetails>(Arc::new(DieselEntityStore::new(pool.clone()))),
    )
}

fn in_memory_resources() -> (
    Arc<dyn EntityResource<User>>,
    Arc<dyn EntityResource<OrderDetails>>,
) {
    (
        build_resource::<User>(Arc::new(InMemoryEntityStore::new())),
        build_resource::<OrderDetails>(Arc::new(InMemoryEntityStore::new())),
    )
}

/// Build the HTTP state, using Diesel stores when a pool is configured and
/// in-memory stores otherwise.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let (users, order_details) = match &config.db_pool {
        Some(pool) => diesel_resources(pool),
        None => {
            warn!("no database configured; resources are held in memory and lost on restart");
            in_memory_resources()
        }
    };
    web::Data::new(HttpState::new(users, order_details, config.alerts.clone()))
}
