use std::time::Duration;

use axum::Router;
use configs::AppConfig;
use migration::{Migrator, MigratorTrait};
use sea_orm::DatabaseConnection;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::errors::StartupError;
use crate::routes::{self, ServerState};

/// Any origin, any method, any header.
pub fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Assemble the application around an already connected pool.
pub fn build_app(db: DatabaseConnection, cfg: &AppConfig) -> Router {
    let state = ServerState { db };
    routes::build_router(
        state,
        build_cors(),
        &cfg.server.api_prefix,
        Duration::from_secs(cfg.server.request_timeout_secs),
    )
}

/// Connect the pool from configuration and bring the schema up to date.
pub async fn connect_and_migrate(cfg: &AppConfig) -> Result<DatabaseConnection, StartupError> {
    let db_cfg = models::db::DatabaseConfig::from(&cfg.database);
    let db = models::db::connect_with_config(&db_cfg).await?;
    Migrator::up(&db, None).await?;
    info!("migrations applied");
    Ok(db)
}

/// Bind the listening socket; failures name the address.
pub async fn bind_listener(host: &str, port: u16) -> Result<TcpListener, StartupError> {
    TcpListener::bind((host, port))
        .await
        .map_err(|source| StartupError::Bind { addr: format!("{host}:{port}"), source })
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    info!("received Ctrl+C, draining connections");
}

/// Public entry: connect, migrate, serve until Ctrl+C, then close the pool.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let db = connect_and_migrate(&cfg).await?;
    let app = build_app(db.clone(), &cfg);

    let listener = bind_listener(&cfg.server.host, cfg.server.port).await?;
    info!(addr = %listener.local_addr()?, prefix = %cfg.server.api_prefix, "starting server");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.close().await?;
    info!("database pool closed");
    Ok(())
}
