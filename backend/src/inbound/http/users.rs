//! Users API handlers.
//!
//! ```text
//! POST   /api/users       {"name":"Ada","email":"ada@example.com"}
//! PUT    /api/users/{id}  {"id":1,"name":"Ada Lovelace"}
//! PATCH  /api/users/{id}  {"id":1,"email":null}
//! GET    /api/users
//! GET    /api/users/{id}
//! DELETE /api/users/{id}
//! ```

use actix_web::{HttpResponse, delete, get, patch, post, put, web};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Entity, EntityId, Submission, User, UserDraft, UserPatch};
use crate::inbound::http::alert::AlertResult;
use crate::inbound::http::merge_patch::present;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// User as exchanged over HTTP.
///
/// Example JSON:
/// `{"id":1,"name":"Ada","email":"ada@example.com","password":null,"birth":"1815-12-10"}`
#[derive(Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserBody {
    /// Store-assigned identifier; omit on create.
    #[schema(example = 1)]
    pub id: Option<i64>,
    #[schema(example = "Ada Lovelace")]
    pub name: Option<String>,
    #[schema(example = "ada@example.com")]
    pub email: Option<String>,
    pub password: Option<String>,
    /// Calendar date, `YYYY-MM-DD`.
    #[schema(value_type = Option<String>, format = Date, example = "1815-12-10")]
    pub birth: Option<NaiveDate>,
}

impl From<User> for UserBody {
    fn from(user: User) -> Self {
        let id = user.id().get();
        let UserDraft {
            name,
            email,
            password,
            birth,
        } = user.into_details();
        Self {
            id: Some(id),
            name,
            email,
            password,
            birth,
        }
    }
}

impl From<UserBody> for Submission<UserDraft> {
    fn from(body: UserBody) -> Self {
        let UserBody {
            id,
            name,
            email,
            password,
            birth,
        } = body;
        Submission::new(
            id.map(EntityId::new),
            UserDraft {
                name,
                email,
                password,
                birth,
            },
        )
    }
}

/// Merge-patch body for a user.
///
/// Absent keys keep the stored value; `null` clears it.
#[derive(Default, Deserialize, ToSchema)]
pub struct UserPatchBody {
    /// Must match the path identifier.
    #[schema(example = 1)]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub email: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub password: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>, format = Date)]
    pub birth: Option<Option<NaiveDate>>,
}

impl From<UserPatchBody> for Submission<UserPatch> {
    fn from(body: UserPatchBody) -> Self {
        Submission::new(
            body.id.map(EntityId::new),
            UserPatch {
                name: body.name.into(),
                email: body.email.into(),
                password: body.password.into(),
                birth: body.birth.into(),
            },
        )
    }
}

/// Create a user. The body must not carry an identifier.
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = UserBody,
    responses(
        (status = 201, description = "User created", body = UserBody,
            headers(("Location" = String, description = "URI of the new user"))),
        (status = 400, description = "Identifier supplied or malformed body", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "createUsers"
)]
#[post("/users")]
pub async fn create_users(
    state: web::Data<HttpState>,
    payload: web::Json<UserBody>,
) -> AlertResult<HttpResponse> {
    state
        .users_route()
        .create::<UserBody>(payload.into_inner().into())
        .await
}

/// Replace every field of an existing user.
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    params(("id" = i64, Path, description = "User identifier")),
    request_body = UserBody,
    responses(
        (status = 200, description = "User replaced", body = UserBody),
        (status = 400, description = "Identifier missing, mismatched, or unknown", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "updateUsers"
)]
#[put("/users/{id}")]
pub async fn update_users(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    payload: web::Json<UserBody>,
) -> AlertResult<HttpResponse> {
    let id = EntityId::new(path.into_inner());
    state
        .users_route()
        .update::<UserBody>(id, payload.into_inner().into())
        .await
}

/// Merge the supplied fields into an existing user.
///
/// Accepts `application/json` and `application/merge-patch+json`.
#[utoipa::path(
    patch,
    path = "/api/users/{id}",
    params(("id" = i64, Path, description = "User identifier")),
    request_body(content = UserPatchBody, content_type = "application/merge-patch+json"),
    responses(
        (status = 200, description = "Merged user", body = UserBody),
        (status = 400, description = "Identifier missing or mismatched", body = ErrorSchema),
        (status = 404, description = "Unknown user", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "partialUpdateUsers"
)]
#[patch("/users/{id}")]
pub async fn partial_update_users(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    payload: web::Json<UserPatchBody>,
) -> AlertResult<HttpResponse> {
    let id = EntityId::new(path.into_inner());
    state
        .users_route()
        .partial_update::<UserBody>(id, payload.into_inner().into())
        .await
}

/// List every user ordered by identifier.
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "Users", body = [UserBody]),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "getAllUsers"
)]
#[get("/users")]
pub async fn get_all_users(state: web::Data<HttpState>) -> AlertResult<HttpResponse> {
    state.users_route().list::<UserBody>().await
}

/// Fetch one user.
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(("id" = i64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User", body = UserBody),
        (status = 404, description = "Unknown user", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "getUsers"
)]
#[get("/users/{id}")]
pub async fn get_users(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> AlertResult<HttpResponse> {
    let id = EntityId::new(path.into_inner());
    state.users_route().get::<UserBody>(id).await
}

/// Delete a user. Succeeds whether or not it existed.
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    params(("id" = i64, Path, description = "User identifier")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "deleteUsers"
)]
#[delete("/users/{id}")]
pub async fn delete_users(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> AlertResult<HttpResponse> {
    let id = EntityId::new(path.into_inner());
    state.users_route().delete(id).await
}
