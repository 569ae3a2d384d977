//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::EntityResource;
use crate::domain::{OrderDetails, User};

use super::alert::HeaderAlerts;
use super::resource::ResourceRoute;

/// Collection path of the users resource.
pub const USERS_PATH: &str = "/api/users";
/// Collection path of the order details resource.
pub const ORDER_DETAILS_PATH: &str = "/api/order-details";

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<dyn EntityResource<User>>,
    pub order_details: Arc<dyn EntityResource<OrderDetails>>,
    pub alerts: HeaderAlerts,
}

impl HttpState {
    /// Construct state from the resource ports and alert configuration.
    pub fn new(
        users: Arc<dyn EntityResource<User>>,
        order_details: Arc<dyn EntityResource<OrderDetails>>,
        alerts: HeaderAlerts,
    ) -> Self {
        Self {
            users,
            order_details,
            alerts,
        }
    }

    /// Users resource bound to its collection path.
    pub fn users_route(&self) -> ResourceRoute<'_, User> {
        ResourceRoute::new(self.users.as_ref(), &self.alerts, USERS_PATH)
    }

    /// Order details resource bound to its collection path.
    pub fn order_details_route(&self) -> ResourceRoute<'_, OrderDetails> {
        ResourceRoute::new(self.order_details.as_ref(), &self.alerts, ORDER_DETAILS_PATH)
    }
}
