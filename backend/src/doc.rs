//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every resource handler, the health probes and the
//! HTTP body schemas. Domain types stay free of utoipa derives; the wire
//! shapes live in the inbound layer.
//!
//! The generated OpenAPI document backs Swagger UI in debug builds.

use crate::inbound::http::order_details::OrderDetailsBody;
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use crate::inbound::http::users::{UserBody, UserPatchBody};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Shopping cart backend API",
        description = "CRUD resources for users and order details, plus health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::create_users,
        crate::inbound::http::users::update_users,
        crate::inbound::http::users::partial_update_users,
        crate::inbound::http::users::get_all_users,
        crate::inbound::http::users::get_users,
        crate::inbound::http::users::delete_users,
        crate::inbound::http::order_details::create_order_details,
        crate::inbound::http::order_details::update_order_details,
        crate::inbound::http::order_details::partial_update_order_details,
        crate::inbound::http::order_details::get_all_order_details,
        crate::inbound::http::order_details::get_order_details,
        crate::inbound::http::order_details::delete_order_details,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        UserBody,
        UserPatchBody,
        OrderDetailsBody,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "users", description = "User accounts"),
        (name = "order-details", description = "Order details"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
