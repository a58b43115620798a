//! Backend entry-point: wires REST endpoints and OpenAPI docs.

mod server;

use actix_web::web;
use color_eyre::eyre::{Result, WrapErr};
use ortho_config::OrthoConfig;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use crate::server::{AppSettings, ServerConfig, create_server};
use hirewatch_backend::inbound::http::health::HealthState;
use hirewatch_backend::outbound::persistence::{DbPool, PoolConfig};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load().wrap_err("failed to load settings")?;

    let pool = DbPool::new(PoolConfig::new(settings.database_url()))
        .wrap_err("failed to build database pool")?;
    pool.run_migrations()
        .await
        .wrap_err("failed to run database migrations")?;

    let config = ServerConfig::new(settings.bind_addr())
        .with_db_pool(pool)
        .with_page_size(settings.page_size());

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config).wrap_err("failed to start HTTP server")?;
    server.await.wrap_err("server terminated abnormally")
}
