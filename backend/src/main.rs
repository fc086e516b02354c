//! Words server entry-point: loads settings, prepares storage and serves
//! the definitions routes.

mod server;

use actix_web::cookie::SameSite;
use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerConfig, create_server};
use words::inbound::http::health::HealthState;
use words::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations_blocking};
use words::settings::{BuildMode, ServerSettings};

fn init_tracing() {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }
}

async fn connect_database(url: &str, max_connections: u32) -> std::io::Result<DbPool> {
    let applied = run_pending_migrations_blocking(url.to_owned())
        .await
        .map_err(std::io::Error::other)?;
    info!(applied, "database schema up to date");

    DbPool::new(PoolConfig::new(url).with_max_size(max_connections))
        .await
        .map_err(std::io::Error::other)
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    init_tracing();

    let settings = ServerSettings::load_from_iter(std::env::args_os())
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;
    let mode = BuildMode::from_debug_assertions();
    let key = settings.session_key(mode).map_err(std::io::Error::other)?;
    let bind_addr = settings.bind_addr().map_err(std::io::Error::other)?;

    let mut config = ServerConfig::new(key, settings.cookie_secure(), SameSite::Lax, bind_addr)
        .with_dev_accounts(settings.dev_accounts(mode));
    if let Some(url) = settings.database_url() {
        let pool = connect_database(url, settings.db_max_connections()).await?;
        config = config.with_db_pool(pool);
    }

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    info!(%bind_addr, "listening");

    let handle = server.handle();
    let shutdown_health = health_state.clone();
    actix_web::rt::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            shutdown_health.mark_unhealthy();
            handle.stop(true).await;
        }
    });

    server.await
}
