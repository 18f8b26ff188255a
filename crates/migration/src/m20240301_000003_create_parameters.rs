//! Create `parameters` table with FK to `apis`.
//! Parameters form a set per API, hence the composite unique index.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Parameters::Table)
                    .if_not_exists()
                    .col(integer(Parameters::Id).auto_increment().primary_key())
                    .col(integer(Parameters::ApiId))
                    .col(text(Parameters::Parameter))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_parameters_api")
                            .from(Parameters::Table, Parameters::ApiId)
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
                    .name("uniq_parameters_api_parameter")
                    .table(Parameters::Table)
                    .col(Parameters::ApiId)
                    .col(Parameters::Parameter)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Parameters::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Parameters { Table, Id, ApiId, Parameter }

#[derive(DeriveIden)]
enum Apis { Table, Id }
