use sea_orm::{entity::prelude::*, ConnectionTrait, ForeignKeyAction, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::{dashboard, dashboard_pane, parameter, user};

/// A user-defined external endpoint plus its pane placement.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "apis")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    #[sea_orm(column_type = "Text")]
    pub api_name: String,
    #[sea_orm(column_type = "Text")]
    pub api_string: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub api_key: Option<String>,
    pub graph_type: String,
    pub pane_x: i32,
    pub pane_y: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    User,
    Parameter,
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
            Relation::Parameter => Entity::has_many(parameter::Entity).into(),
            Relation::DashboardPane => Entity::has_many(dashboard_pane::Entity).into(),
        }
    }
}

impl Related<user::Entity> for Entity {
    fn to() -> RelationDef { Relation::User.def() }
}

impl Related<parameter::Entity> for Entity {
    fn to() -> RelationDef { Relation::Parameter.def() }
}

impl Related<dashboard::Entity> for Entity {
    fn to() -> RelationDef { dashboard_pane::Relation::Dashboard.def() }

    fn via() -> Option<RelationDef> { Some(dashboard_pane::Relation::Api.def().rev()) }
}

impl ActiveModelBehavior for ActiveModel {}

/// Column values for a new API row.
#[derive(Clone, Debug)]
pub struct NewApi {
    pub user_id: i32,
    pub api_name: String,
    pub api_string: String,
    pub api_key: Option<String>,
    pub graph_type: String,
    pub pane_x: i32,
    pub pane_y: i32,
}

impl NewApi {
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.api_name.trim().is_empty() { return Err(ModelError::validation("apiName required")); }
        if self.api_string.trim().is_empty() { return Err(ModelError::validation("apiString required")); }
        if self.graph_type.trim().is_empty() { return Err(ModelError::validation("graphType required")); }
        if self.graph_type.len() > 64 { return Err(ModelError::validation("graphType too long (<=64)")); }
        Ok(())
    }
}

pub async fn create<C: ConnectionTrait>(db: &C, input: NewApi) -> Result<Model, ModelError> {
    input.validate()?;
    let am = ActiveModel {
        user_id: Set(input.user_id),
        api_name: Set(input.api_name),
        api_string: Set(input.api_string),
        api_key: Set(input.api_key),
        graph_type: Set(input.graph_type),
        pane_x: Set(input.pane_x),
        pane_y: Set(input.pane_y),
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
