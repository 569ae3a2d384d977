//! HTTP server configuration object and helpers.

use std::net::SocketAddr;

use cart_backend::inbound::http::alert::HeaderAlerts;
use cart_backend::outbound::persistence::DbPool;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) alerts: HeaderAlerts,
    pub(crate) db_pool: Option<DbPool>,
}

impl ServerConfig {
    /// Construct a server configuration without persistence.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, alerts: HeaderAlerts) -> Self {
        Self {
            bind_addr,
            alerts,
            db_pool: None,
        }
    }

    /// Attach a database connection pool.
    ///
    /// When provided, both resources persist through Diesel instead of the
    /// in-memory stores.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }
}
