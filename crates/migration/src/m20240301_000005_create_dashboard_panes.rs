//! Create `dashboard_panes`, the many-to-many join between dashboards and apis.
//! Either side's deletion removes the association row.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DashboardPanes::Table)
                    .if_not_exists()
                    .col(integer(DashboardPanes::Id).auto_increment().primary_key())
                    .col(integer(DashboardPanes::DashboardId))
                    .col(integer(DashboardPanes::ApiId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_dashboard_panes_dashboard")
                            .from(DashboardPanes::Table, DashboardPanes::DashboardId)
                            .to(Dashboards::Table, Dashboards::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_dashboard_panes_api")
                            .from(DashboardPanes::Table, DashboardPanes::ApiId)
                            .to(Apis::Table, Apis::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uniq_dashboard_panes_dashboard_api")
                    .table(DashboardPanes::Table)
                    .col(DashboardPanes::DashboardId)
                    .col(DashboardPanes::ApiId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(DashboardPanes::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum DashboardPanes { Table, Id, DashboardId, ApiId }

#[derive(DeriveIden)]
enum Dashboards { Table, Id }

#[derive(DeriveIden)]
enum Apis { Table, Id }
