//! Create `apis` table with FK to `users`.
//!
//! An API row is an external endpoint description plus its pane placement.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Apis::Table)
                    .if_not_exists()
                    .col(integer(Apis::Id).auto_increment().primary_key())
                    .col(integer(Apis::UserId))
                    .col(text(Apis::ApiName))
                    .col(text(Apis::ApiString))
                    .col(text_null(Apis::ApiKey))
                    .col(string_len(Apis::GraphType, 64))
                    .col(integer(Apis::PaneX))
                    .col(integer(Apis::PaneY))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_apis_user")
                            .from(Apis::Table, Apis::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Apis::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Apis { Table, Id, UserId, ApiName, ApiString, ApiKey, GraphType, PaneX, PaneY }

#[derive(DeriveIden)]
enum Users { Table, Id }
