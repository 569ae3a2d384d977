//! Order details API handlers.
//!
//! Order details carry identity only, so create, replace, and merge bodies
//! share one DTO.

use actix_web::{HttpResponse, delete, get, patch, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    Entity, EntityId, NewOrderDetails, OrderDetails, OrderDetailsPatch, Submission,
};
use crate::inbound::http::alert::AlertResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Order details as exchanged over HTTP.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct OrderDetailsBody {
    /// Store-assigned identifier; omit on create.
    #[schema(example = 1)]
    pub id: Option<i64>,
}

impl From<OrderDetails> for OrderDetailsBody {
    fn from(order_details: OrderDetails) -> Self {
        Self {
            id: Some(order_details.id().get()),
        }
    }
}

impl From<OrderDetailsBody> for Submission<NewOrderDetails> {
    fn from(body: OrderDetailsBody) -> Self {
        Submission::new(body.id.map(EntityId::new), NewOrderDetails)
    }
}

impl From<OrderDetailsBody> for Submission<OrderDetailsPatch> {
    fn from(body: OrderDetailsBody) -> Self {
        Submission::new(body.id.map(EntityId::new), OrderDetailsPatch)
    }
}

/// Create order details. The body must not carry an identifier.
#[utoipa::path(
    post,
    path = "/api/order-details",
    request_body = OrderDetailsBody,
    responses(
        (status = 201, description = "Order details created", body = OrderDetailsBody,
            headers(("Location" = String, description = "URI of the new record"))),
        (status = 400, description = "Identifier supplied or malformed body", body = ErrorSchema)
    ),
    tags = ["order-details"],
    operation_id = "createOrderDetails"
)]
#[post("/order-details")]
pub async fn create_order_details(
    state: web::Data<HttpState>,
    payload: web::Json<OrderDetailsBody>,
) -> AlertResult<HttpResponse> {
    state
        .order_details_route()
        .create::<OrderDetailsBody>(payload.into_inner().into())
        .await
}

/// Replace existing order details.
#[utoipa::path(
    put,
    path = "/api/order-details/{id}",
    params(("id" = i64, Path, description = "Order details identifier")),
    request_body = OrderDetailsBody,
    responses(
        (status = 200, description = "Order details replaced", body = OrderDetailsBody),
        (status = 400, description = "Identifier missing, mismatched, or unknown", body = ErrorSchema)
    ),
    tags = ["order-details"],
    operation_id = "updateOrderDetails"
)]
#[put("/order-details/{id}")]
pub async fn update_order_details(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    payload: web::Json<OrderDetailsBody>,
) -> AlertResult<HttpResponse> {
    let id = EntityId::new(path.into_inner());
    state
        .order_details_route()
        .update::<OrderDetailsBody>(id, payload.into_inner().into())
        .await
}

/// Partially update existing order details.
#[utoipa::path(
    patch,
    path = "/api/order-details/{id}",
    params(("id" = i64, Path, description = "Order details identifier")),
    request_body(content = OrderDetailsBody, content_type = "application/merge-patch+json"),
    responses(
        (status = 200, description = "Merged order details", body = OrderDetailsBody),
        (status = 400, description = "Identifier missing or mismatched", body = ErrorSchema),
        (status = 404, description = "Unknown order details", body = ErrorSchema)
    ),
    tags = ["order-details"],
    operation_id = "partialUpdateOrderDetails"
)]
#[patch("/order-details/{id}")]
pub async fn partial_update_order_details(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    payload: web::Json<OrderDetailsBody>,
) -> AlertResult<HttpResponse> {
    let id = EntityId::new(path.into_inner());
    state
        .order_details_route()
        .partial_update::<OrderDetailsBody>(id, payload.into_inner().into())
        .await
}

/// List all order details ordered by identifier.
#[utoipa::path(
    get,
    path = "/api/order-details",
    responses((status = 200, description = "Order details", body = [OrderDetailsBody])),
    tags = ["order-details"],
    operation_id = "getAllOrderDetails"
)]
#[get("/order-details")]
pub async fn get_all_order_details(state: web::Data<HttpState>) -> AlertResult<HttpResponse> {
    state.order_details_route().list::<OrderDetailsBody>().await
}

/// Fetch one order details record.
#[utoipa::path(
    get,
    path = "/api/order-details/{id}",
    params(("id" = i64, Path, description = "Order details identifier")),
    responses(
        (status = 200, description = "Order details", body = OrderDetailsBody),
        (status = 404, description = "Unknown order details", body = ErrorSchema)
    ),
    tags = ["order-details"],
    operation_id = "getOrderDetails"
)]
#[get("/order-details/{id}")]
pub async fn get_order_details(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> AlertResult<HttpResponse> {
    let id = EntityId::new(path.into_inner());
    state.order_details_route().get::<OrderDetailsBody>(id).await
}

/// Delete order details. Succeeds whether or not the record existed.
#[utoipa::path(
    delete,
    path = "/api/order-details/{id}",
    params(("id" = i64, Path, description = "Order details identifier")),
    responses((status = 204, description = "Order details deleted")),
    tags = ["order-details"],
    operation_id = "deleteOrderDetails"
)]
#[delete("/order-details/{id}")]
pub async fn delete_order_details(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> AlertResult<HttpResponse> {
    let id = EntityId::new(path.into_inner());
    state.order_details_route().delete(id).await
}
