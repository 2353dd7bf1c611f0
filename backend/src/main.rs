//! Backend entry-point: migrates and seeds the database, then serves the
//! REST API and OpenAPI docs.

mod server;

use actix_web::web;
use color_eyre::eyre::{Context, Result, eyre};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use clinic_backend::inbound::http::health::HealthState;
use clinic_backend::outbound::persistence::{DbPool, PoolConfig};
use clinic_backend::settings::AppSettings;
use clinic_backend::startup::prepare_database;
use server::{ServerConfig, create_server};

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

    let settings = AppSettings::load_from_iter(std::env::args_os())
        .map_err(|err| eyre!("failed to load configuration: {err}"))?;
    let bind_addr = settings.bind_addr()?;
    let pool_config =
        PoolConfig::new(settings.database_url()).with_max_size(settings.pool_max_size()?);
    let pool = DbPool::new(pool_config)
        .await
        .wrap_err("failed to open database pool")?;

    prepare_database(&pool, settings.seed_on_startup)
        .await
        .wrap_err("failed to prepare database")?;

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, ServerConfig::new(bind_addr, pool))
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    info!(%bind_addr, "clinic backend listening");
    server.await.wrap_err("server terminated with an error")
}
