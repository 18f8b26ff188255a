use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Apis: listed by owner
        manager
            .create_index(
                Index::create()
                    .name("idx_apis_user")
                    .table(Apis::Table)
                    .col(Apis::UserId)
                    .to_owned(),
            )
            .await?;

        // Parameters: eager-loaded per api (the unique index leads with api_id,
        // but a dedicated one keeps the lookup cheap on every backend)
        manager
            .create_index(
                Index::create()
                    .name("idx_parameters_api")
                    .table(Parameters::Table)
                    .col(Parameters::ApiId)
                    .to_owned(),
            )
            .await?;

        // Dashboards: listed by owner
        manager
            .create_index(
                Index::create()
                    .name("idx_dashboards_user")
                    .table(Dashboards::Table)
                    .col(Dashboards::UserId)
                    .to_owned(),
            )
            .await?;

        // DashboardPanes: cascade and cleanup by api
        manager
            .create_index(
                Index::create()
                    .name("idx_dashboard_panes_api")
                    .table(DashboardPanes::Table)
                    .col(DashboardPanes::ApiId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_apis_user").table(Apis::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_parameters_api").table(Parameters::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_dashboards_user").table(Dashboards::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_dashboard_panes_api").table(DashboardPanes::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Apis { Table, UserId }

#[derive(DeriveIden)]
enum Parameters { Table, ApiId }

#[derive(DeriveIden)]
enum Dashboards { Table, UserId }

#[derive(DeriveIden)]
enum DashboardPanes { Table, ApiId }
