//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};

use crate::Trace;
use crate::domain::ports::InMemoryEntityStore;
use crate::domain::{OrderDetails, ResourceService, User};

use super::alert::HeaderAlerts;
use super::api_scope;
use super::state::HttpState;

/// Application name used by handler tests.
pub const TEST_APPLICATION_NAME: &str = "shoppingCartApp";

/// Build HTTP state backed by fresh in-memory stores.
pub fn in_memory_state() -> HttpState {
    let users: InMemoryEntityStore<User> = InMemoryEntityStore::new();
    let order_details: InMemoryEntityStore<OrderDetails> = InMemoryEntityStore::new();
    HttpState::new(
        Arc::new(ResourceService::new(Arc::new(users))),
        Arc::new(ResourceService::new(Arc::new(order_details))),
        HeaderAlerts::new(TEST_APPLICATION_NAME).expect("valid test application name"),
    )
}

/// Build an app serving the resource scope over `state`.
pub fn test_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .wrap(Trace)
        .service(api_scope())
}
