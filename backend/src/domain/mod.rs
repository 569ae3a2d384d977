//! Domain primitives, entities, and services.
//!
//! Purpose: Define strongly typed entities used by the API and persistence
//! layers, plus the generic resource service that enforces identifier rules
//! and transaction boundaries.
//!
//! Public surface:
//! - Entity / EntityId / Submission / FieldUpdate: shared resource vocabulary.
//! - User / OrderDetails: the managed entities.
//! - ResourceService: driving port implementation over an entity store.
//! - Error / ErrorCode: transport-agnostic error payload.
//! - BadRequestAlert / AlertReason: identifier rule violations.

pub mod bad_request;
pub mod entity;
pub mod error;
pub mod order_details;
pub mod ports;
pub mod resource_service;
pub mod trace_id;
pub mod user;

pub use self::bad_request::{AlertReason, BadRequestAlert};
pub use self::entity::{Entity, EntityId, FieldUpdate, Submission};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::order_details::{NewOrderDetails, OrderDetails, OrderDetailsPatch};
pub use self::resource_service::ResourceService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{User, UserDraft, UserPatch};

