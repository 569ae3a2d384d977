//! Backend entry-point: loads settings, prepares persistence and starts the
//! HTTP server.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use cart_backend::inbound::http::alert::HeaderAlerts;
use cart_backend::inbound::http::health::HealthState;
use cart_backend::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use cart_backend::settings::AppSettings;

use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load()
        .map_err(|err| std::io::Error::other(format!("failed to load settings: {err}")))?;
    let alerts = HeaderAlerts::new(settings.application_name())
        .map_err(|err| std::io::Error::other(err.to_string()))?;

    let mut config = ServerConfig::new(settings.bind_addr(), alerts);
    if let Some(database_url) = settings.database_url() {
        config = config.with_db_pool(prepare_database(&settings, database_url).await?);
    }

    let health_state = web::Data::new(HealthState::new());
    info!(bind_addr = %settings.bind_addr(), "starting HTTP server");
    create_server(health_state, config)?.await
}

async fn prepare_database(settings: &AppSettings, database_url: &str) -> std::io::Result<DbPool> {
    if settings.run_migrations() {
        run_pending_migrations(database_url)
            .await
            .map_err(|err| std::io::Error::other(err.to_string()))?;
    }

    let pool_config = PoolConfig::new(database_url).with_max_size(settings.db_max_connections());
    DbPool::new(pool_config)
        .await
        .map_err(|err| std::io::Error::other(err.to_string()))
}
