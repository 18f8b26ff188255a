use migration::MigratorTrait;
use sea_orm::DatabaseConnection;

use crate::db::{connect_with_config, DatabaseConfig};


/// CRUD operations tests for all models
pub mod crud_tests;

/// Transaction handling and cascade tests
pub mod transaction_tests;

/// Fresh in-memory database with the full schema applied.
pub(crate) async fn setup_test_db() -> anyhow::Result<DatabaseConnection> {
    let db = connect_with_config(&DatabaseConfig::in_memory_sqlite()).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

pub(crate) async fn seed_user(db: &DatabaseConnection, email: &str) -> anyhow::Result<crate::user::Model> {
    Ok(crate::user::create(db, "Seed User", email, "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA").await?)
}

pub(crate) fn new_api(user_id: i32, name: &str) -> crate::api::NewApi {
    crate::api::NewApi {
        user_id,
        api_name: name.to_string(),
        api_string: format!("https://api.example.com/{}", name.to_lowercase()),
        api_key: Some("secret-key".to_string()),
        graph_type: "line".to_string(),
        pane_x: 300,
        pane_y: 200,
    }
}
