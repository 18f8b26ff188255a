use std::time::Duration;

use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, Statement};
use tracing::info;

/// Pool settings resolved into durations, built from `configs::DatabaseConfig`.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout: Duration,
    pub acquire_timeout: Duration,
    pub idle_timeout: Duration,
    pub max_lifetime: Duration,
    pub sqlx_logging: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self::from(&configs::DatabaseConfig::default())
    }
}

impl From<&configs::DatabaseConfig> for DatabaseConfig {
    fn from(c: &configs::DatabaseConfig) -> Self {
        Self {
            url: c.url.clone(),
            max_connections: c.max_connections,
            min_connections: c.min_connections,
            connect_timeout: Duration::from_secs(c.connect_timeout_secs),
            acquire_timeout: Duration::from_secs(c.acquire_timeout_secs),
            idle_timeout: Duration::from_secs(c.idle_timeout_secs),
            max_lifetime: Duration::from_secs(c.max_lifetime_secs),
            sqlx_logging: c.sqlx_logging,
        }
    }
}

impl DatabaseConfig {
    /// A private in-memory SQLite database. Every call yields a new, empty one.
    pub fn in_memory_sqlite() -> Self {
        Self { url: "sqlite::memory:".to_string(), max_connections: 1, min_connections: 1, ..Self::default() }
    }

    pub fn is_in_memory(&self) -> bool {
        self.url.starts_with("sqlite:") && self.url.contains(":memory:")
    }
}

/// Idle and lifetime bound for the single in-memory connection. Recycling it
/// would swap in a fresh, empty database.
pub const IN_MEMORY_PIN: Duration = Duration::from_secs(60 * 60 * 24 * 365);

pub fn connect_options(cfg: &DatabaseConfig) -> ConnectOptions {
    let mut opt = ConnectOptions::new(cfg.url.clone());
    opt.connect_timeout(cfg.connect_timeout)
        .acquire_timeout(cfg.acquire_timeout)
        .sqlx_logging(cfg.sqlx_logging);

    if cfg.is_in_memory() {
        // each pooled connection would open its own empty database
        opt.max_connections(1)
            .min_connections(1)
            .idle_timeout(IN_MEMORY_PIN)
            .max_lifetime(IN_MEMORY_PIN);
    } else {
        opt.max_connections(cfg.max_connections)
            .min_connections(cfg.min_connections)
            .idle_timeout(cfg.idle_timeout)
            .max_lifetime(cfg.max_lifetime);
    }
    opt
}

pub async fn connect_with_config(cfg: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(connect_options(cfg)).await?;
    info!(backend = ?db.get_database_backend(), max_connections = cfg.max_connections, "database pool ready");
    Ok(db)
}

/// Round-trip a trivial statement; used by the health endpoint.
pub async fn ping(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    db.query_one(Statement::from_string(backend, "SELECT 1".to_string())).await?;
    Ok(())
}
