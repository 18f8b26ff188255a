//! Migrator registering one migration per table in foreign-key order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240301_000001_create_users;
mod m20240301_000002_create_apis;
mod m20240301_000003_create_parameters;
mod m20240301_000004_create_dashboards;
mod m20240301_000005_create_dashboard_panes;
mod m20240301_000006_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240301_000001_create_users::Migration),
            Box::new(m20240301_000002_create_apis::Migration),
            Box::new(m20240301_000003_create_parameters::Migration),
            Box::new(m20240301_000004_create_dashboards::Migration),
            Box::new(m20240301_000005_create_dashboard_panes::Migration),
            // Indexes should always be applied last
            Box::new(m20240301_000006_add_indexes::Migration),
        ]
    }
}
