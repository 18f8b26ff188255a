use sea_orm::{entity::prelude::*, ConnectionTrait, ForeignKeyAction, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::{api, dashboard_pane, user};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "dashboards")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    #[sea_orm(column_type = "Text")]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    User,
    DashboardPane,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::User => Entity::belongs_to(user::Entity)
                .from(Column::UserId)
                .to(user::Column::Id)
                .on_delete(ForeignKeyAction::Cascade)
                .into(),
            Relation::DashboardPane => Entity::has_many(dashboard_pane::Entity).into(),
        }
    }
}

impl Related<user::Entity> for Entity {
    fn to() -> RelationDef { Relation::User.def() }
}

impl Related<dashboard_pane::Entity> for Entity {
    fn to() -> RelationDef { Relation::DashboardPane.def() }
}

impl Related<api::Entity> for Entity {
    fn to() -> RelationDef { dashboard_pane::Relation::Api.def() }

    fn via() -> Option<RelationDef> { Some(dashboard_pane::Relation::Dashboard.def().rev()) }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_name(name: &str) -> Result<(), ModelError> {
    if name.trim().is_empty() { return Err(ModelError::validation("dashboard name required")); }
    Ok(())
}

pub async fn create<C: ConnectionTrait>(db: &C, user_id: i32, name: &str) -> Result<Model, ModelError> {
    validate_name(name)?;
    let am = ActiveModel {
        user_id: Set(user_id),
        name: Set(name.trim().to_string()),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

pub async fn list_by_user<C: ConnectionTrait>(db: &C, user_id: i32) -> Result<Vec<Model>, ModelError> {
    Ok(Entity::find()
        .filter(Column::UserId.eq(user_id))
        .order_by_asc(Column::Id)
        .all(db)
        .await?)
}

/// `None` if no such dashboard.
pub async fn rename<C: ConnectionTrait>(db: &C, id: i32, name: &str) -> Result<Option<Model>, ModelError> {
    validate_name(name)?;
    let Some(found) = Entity::find_by_id(id).one(db).await? else { return Ok(None) };
    let mut am: ActiveModel = found.into();
    am.name = Set(name.trim().to_string());
    Ok(Some(am.update(db).await?))
}

/// Pane rows go with the dashboard through the cascading foreign key; the
/// referenced apis are untouched. Returns whether a row was deleted.
pub async fn hard_delete<C: ConnectionTrait>(db: &C, id: i32) -> Result<bool, ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await?;
    Ok(res.rows_affected > 0)
}
