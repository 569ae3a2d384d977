//! HTTP inbound adapter exposing REST endpoints.

pub mod alert;
pub mod error;
pub mod health;
pub mod merge_patch;
pub mod order_details;
pub mod resource;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;

use actix_web::{Scope, web};

/// Every resource handler mounted under `/api`, with JSON and path extractor
/// failures mapped to `invalid_request` envelopes.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use cart_backend::inbound::http::api_scope;
///
/// let _app = App::new().service(api_scope());
/// ```
pub fn api_scope() -> Scope {
    web::scope("/api")
        .app_data(error::json_config())
        .app_data(error::path_config())
        .service(users::create_users)
        .service(users::update_users)
        .service(users::partial_update_users)
        .service(users::get_all_users)
        .service(users::get_users)
        .service(users::delete_users)
        .service(order_details::create_order_details)
        .service(order_details::update_order_details)
        .service(order_details::partial_update_order_details)
        .service(order_details::get_all_order_details)
        .service(order_details::get_order_details)
        .service(order_details::delete_order_details)
}
