//! Create `dashboards` table with FK to `users`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Dashboards::Table)
                    .if_not_exists()
                    .col(integer(Dashboards::Id).auto_increment().primary_key())
                    .col(integer(Dashboards::UserId))
                    .col(text(Dashboards::Name))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_dashboards_user")
                            .from(Dashboards::Table, Dashboards::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Dashboards::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Dashboards { Table, Id, UserId, Name }

#[derive(DeriveIden)]
enum Users { Table, Id }
