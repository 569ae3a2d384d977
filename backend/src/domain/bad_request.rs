//! Client-error alerts raised by resource identifier checks.
//!
//! Each alert names the affected entity and a stable reason key. Alerts are
//! carried as [`Error`] values with code [`ErrorCode::InvalidRequest`] and
//! details of the form `{"entityName": "...", "errorKey": "..."}` so inbound
//! adapters can render them without a dedicated error type.
//!
//! [`ErrorCode::InvalidRequest`]: super::ErrorCode::InvalidRequest

use serde_json::{Value, json};

use super::Error;

const ENTITY_NAME_KEY: &str = "entityName";
const ERROR_KEY: &str = "errorKey";

/// Reason attached to a bad request alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertReason {
    /// A new record arrived with an identifier already set.
    IdExists,
    /// An update arrived without an identifier.
    IdNull,
    /// The body identifier differs from the path identifier.
    IdInvalid,
    /// No stored record matches the identifier.
    IdNotFound,
}

impl AlertReason {
    /// Stable key exposed to clients.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::IdExists => "idexists",
            Self::IdNull => "idnull",
            Self::IdInvalid => "idinvalid",
            Self::IdNotFound => "idnotfound",
        }
    }

    fn message(self, entity_name: &str) -> String {
        match self {
            Self::IdExists => format!("A new {entity_name} cannot already have an ID"),
            Self::IdNull => "Invalid id".to_owned(),
            Self::IdInvalid => "Invalid ID".to_owned(),
            Self::IdNotFound => "Entity not found".to_owned(),
        }
    }

    fn from_key(key: &str) -> Option<Self> {
        match key {
            "idexists" => Some(Self::IdExists),
            "idnull" => Some(Self::IdNull),
            "idinvalid" => Some(Self::IdInvalid),
            "idnotfound" => Some(Self::IdNotFound),
            _ => None,
        }
    }
}

/// Entity name and reason extracted from an alert error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadRequestAlert {
    /// Entity the alert refers to.
    pub entity_name: String,
    /// Why the request was rejected.
    pub reason: AlertReason,
}

impl BadRequestAlert {
    /// Build the invalid-request error for `entity_name` and `reason`.
    ///
    /// # Examples
    /// ```
    /// use cart_backend::domain::{AlertReason, BadRequestAlert, ErrorCode};
    ///
    /// let err = BadRequestAlert::error("users", AlertReason::IdNull);
    /// assert_eq!(err.code(), ErrorCode::InvalidRequest);
    /// assert_eq!(
    ///     BadRequestAlert::from_error(&err).map(|alert| alert.reason),
    ///     Some(AlertReason::IdNull)
    /// );
    /// ```
    pub fn error(entity_name: &str, reason: AlertReason) -> Error {
        Error::invalid_request(reason.message(entity_name)).with_details(json!({
            ENTITY_NAME_KEY: entity_name,
            ERROR_KEY: reason.key(),
        }))
    }

    /// Recover the alert from an error built by [`BadRequestAlert::error`].
    pub fn from_error(error: &Error) -> Option<Self> {
        let details = error.details()?;
        let entity_name = details.get(ENTITY_NAME_KEY).and_then(Value::as_str)?;
        let reason = details
            .get(ERROR_KEY)
            .and_then(Value::as_str)
            .and_then(AlertReason::from_key)?;
        Some(Self {
            entity_name: entity_name.to_owned(),
            reason,
        })
    }
}
