//! Application alert headers attached to resource responses.
//!
//! Successful mutations carry `X-<app>-alert` and `X-<app>-params` headers so
//! clients can show a notification. Rejected identifier checks carry
//! `X-<app>-error` and `X-<app>-params` naming the entity.

use std::fmt;

use actix_web::http::StatusCode;
use actix_web::http::header::{HeaderName, HeaderValue, InvalidHeaderName};
use actix_web::{HttpResponse, HttpResponseBuilder, ResponseError};
use tracing::warn;

use crate::domain::{BadRequestAlert, EntityId, Error};

/// Mutation reported by a success alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertAction {
    /// A record was created.
    Created,
    /// A record was replaced or merged.
    Updated,
    /// A record was deleted.
    Deleted,
}

impl AlertAction {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Updated => "updated",
            Self::Deleted => "deleted",
        }
    }
}

/// Application name could not be turned into header names.
#[derive(Debug, thiserror::Error)]
pub enum InvalidApplicationName {
    /// The name was blank.
    #[error("application name must not be empty")]
    Empty,
    /// The name contains characters not allowed in header names.
    #[error("application name `{name}` is not usable in a header name: {source}")]
    Header {
        name: String,
        #[source]
        source: InvalidHeaderName,
    },
}

/// Builds alert headers for one application name.
///
/// # Examples
/// ```
/// use cart_backend::inbound::http::alert::HeaderAlerts;
///
/// let alerts = HeaderAlerts::new("shoppingCartApp").expect("valid name");
/// assert_eq!(alerts.application_name(), "shoppingCartApp");
/// assert!(HeaderAlerts::new("shopping cart").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct HeaderAlerts {
    application_name: String,
    alert: HeaderName,
    error: HeaderName,
    params: HeaderName,
}

impl HeaderAlerts {
    /// Validate `application_name` and precompute the header names.
    pub fn new(application_name: impl Into<String>) -> Result<Self, InvalidApplicationName> {
        let application_name = application_name.into();
        if application_name.trim().is_empty() {
            return Err(InvalidApplicationName::Empty);
        }
        let header = |suffix: &str| {
            HeaderName::try_from(format!("x-{application_name}-{suffix}")).map_err(|source| {
                InvalidApplicationName::Header {
                    name: application_name.clone(),
                    source,
                }
            })
        };
        let alert = header("alert")?;
        let error = header("error")?;
        let params = header("params")?;
        Ok(Self {
            application_name,
            alert,
            error,
            params,
        })
    }

    /// Configured application name.
    pub fn application_name(&self) -> &str {
        &self.application_name
    }

    /// Headers announcing a successful mutation of `entity_name` record `id`.
    pub fn success(&self, entity_name: &str, action: AlertAction, id: EntityId) -> AlertHeaders {
        let message = format!(
            "{}.{entity_name}.{}",
            self.application_name,
            action.as_str()
        );
        AlertHeaders::default()
            .with(self.alert.clone(), message)
            .with(self.params.clone(), id.to_string())
    }

    /// Wrap `error`, attaching alert headers when it is a bad request alert.
    pub fn failure(&self, error: Error) -> AlertedError {
        let headers = match BadRequestAlert::from_error(&error) {
            Some(alert) => AlertHeaders::default()
                .with(self.error.clone(), format!("error.{}", alert.reason.key()))
                .with(self.params.clone(), alert.entity_name),
            None => AlertHeaders::default(),
        };
        AlertedError { error, headers }
    }
}

/// Header pairs ready to be written to a response.
#[derive(Debug, Clone, Default)]
pub struct AlertHeaders(Vec<(HeaderName, HeaderValue)>);

impl AlertHeaders {
    fn with(mut self, name: HeaderName, value: String) -> Self {
        match HeaderValue::try_from(value) {
            Ok(value) => self.0.push((name, value)),
            Err(err) => warn!(header = %name, error = %err, "dropping unencodable alert header"),
        }
        self
    }

    /// Insert every header into `builder`.
    pub fn apply(self, builder: &mut HttpResponseBuilder) {
        for pair in self.0 {
            builder.insert_header(pair);
        }
    }

    /// Iterate over the header pairs.
    pub fn iter(&self) -> impl Iterator<Item = &(HeaderName, HeaderValue)> {
        self.0.iter()
    }
}

/// Domain error carrying alert headers for the HTTP response.
#[derive(Debug)]
pub struct AlertedError {
    error: Error,
    headers: AlertHeaders,
}

impl AlertedError {
    /// Underlying domain error.
    pub fn error(&self) -> &Error {
        &self.error
    }
}

impl From<Error> for AlertedError {
    fn from(error: Error) -> Self {
        Self {
            error,
            headers: AlertHeaders::default(),
        }
    }
}

impl fmt::Display for AlertedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.error, f)
    }
}

impl ResponseError for AlertedError {
    fn status_code(&self) -> StatusCode {
        self.error.status_code()
    }

    fn error_response(&self) -> HttpResponse {
        let mut response = self.error.error_response();
        let headers = response.headers_mut();
        for (name, value) in self.headers.iter() {
            headers.insert(name.clone(), value.clone());
        }
        response
    }
}

/// Result alias for handlers that report alert headers on failure.
pub type AlertResult<T> = Result<T, AlertedError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AlertReason, ErrorCode};
    use rstest::{fixture, rstest};

    #[fixture]
    fn alerts() -> HeaderAlerts {
        HeaderAlerts::new("shoppingCartApp").expect("valid application name")
    }

    fn header<'a>(response: &'a HttpResponse, name: &str) -> Option<&'a str> {
        response
            .headers()
            .get(name)
            .and_then(|value| value.to_str().ok())
    }

    #[rstest]
    #[case(AlertAction::Created, "shoppingCartApp.users.created")]
    #[case(AlertAction::Updated, "shoppingCartApp.users.updated")]
    #[case(AlertAction::Deleted, "shoppingCartApp.users.deleted")]
    fn success_headers_name_the_action(
        alerts: HeaderAlerts,
        #[case] action: AlertAction,
        #[case] expected: &str,
    ) {
        let mut builder = HttpResponse::Ok();
        alerts
            .success("users", action, EntityId::new(12))
            .apply(&mut builder);
        let response = builder.finish();

        assert_eq!(header(&response, "x-shoppingcartapp-alert"), Some(expected));
        assert_eq!(header(&response, "x-shoppingcartapp-params"), Some("12"));
    }

    #[rstest]
    fn bad_request_alerts_carry_error_headers(alerts: HeaderAlerts) {
        let failure = alerts.failure(BadRequestAlert::error("orderDetails", AlertReason::IdInvalid));
        let response = failure.error_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            header(&response, "x-shoppingcartapp-error"),
            Some("error.idinvalid")
        );
        assert_eq!(
            header(&response, "x-shoppingcartapp-params"),
            Some("orderDetails")
        );
    }

    #[rstest]
    fn other_errors_pass_through_without_alerts(alerts: HeaderAlerts) {
        let failure = alerts.failure(Error::not_found("users 3 not found"));
        let response = failure.error_response();

        assert_eq!(failure.error().code(), ErrorCode::NotFound);
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(header(&response, "x-shoppingcartapp-error").is_none());
    }

    #[rstest]
    #[case("")]
    #[case("shopping cart")]
    #[case("caf\u{e9}")]
    fn unusable_application_names_are_rejected(#[case] name: &str) {
        assert!(HeaderAlerts::new(name).is_err());
    }
}
