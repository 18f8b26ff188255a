use sea_orm::{entity::prelude::*, sea_query::OnConflict, ConnectionTrait, ForeignKeyAction, Set, TryInsertResult};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::{api, dashboard};

/// Placement of one api on one dashboard.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "dashboard_panes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub dashboard_id: i32,
    pub api_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Dashboard,
    Api,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Dashboard => Entity::belongs_to(dashboard::Entity)
                .from(Column::DashboardId)
                .to(dashboard::Column::Id)
                .on_delete(ForeignKeyAction::Cascade)
                .into(),
            Relation::Api => Entity::belongs_to(api::Entity)
                .from(Column::ApiId)
                .to(api::Column::Id)
                .on_delete(ForeignKeyAction::Cascade)
                .into(),
        }
    }
}

impl Related<dashboard::Entity> for Entity {
    fn to() -> RelationDef { Relation::Dashboard.def() }
}

impl Related<api::Entity> for Entity {
    fn to() -> RelationDef { Relation::Api.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Insert the association unless it already exists. Returns `true` when a
/// new row was written.
pub async fn attach<C: ConnectionTrait>(db: &C, dashboard_id: i32, api_id: i32) -> Result<bool, ModelError> {
    let am = ActiveModel {
        dashboard_id: Set(dashboard_id),
        api_id: Set(api_id),
        ..Default::default()
    };
    let res = Entity::insert(am)
        .on_conflict(
            OnConflict::columns([Column::DashboardId, Column::ApiId])
                .do_nothing()
                .to_owned(),
        )
        .do_nothing()
        .exec(db)
        .await?;
    Ok(matches!(res, TryInsertResult::Inserted(_)))
}

/// Returns whether an association row was removed.
pub async fn detach<C: ConnectionTrait>(db: &C, dashboard_id: i32, api_id: i32) -> Result<bool, ModelError> {
    let res = Entity::delete_many()
        .filter(Column::DashboardId.eq(dashboard_id))
        .filter(Column::ApiId.eq(api_id))
        .exec(db)
        .await?;
    Ok(res.rows_affected > 0)
}

pub async fn delete_for_api<C: ConnectionTrait>(db: &C, api_id: i32) -> Result<u64, ModelError> {
    let res = Entity::delete_many().filter(Column::ApiId.eq(api_id)).exec(db).await?;
    Ok(res.rows_affected)
}
