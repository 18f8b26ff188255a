use sea_orm::{entity::prelude::*, ConnectionTrait, ForeignKeyAction, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::api;
use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "parameters")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub api_id: i32,
    #[sea_orm(column_type = "Text")]
    pub parameter: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Api }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Api => Entity::belongs_to(api::Entity)
                .from(Column::ApiId)
                .to(api::Column::Id)
                .on_delete(ForeignKeyAction::Cascade)
                .into(),
        }
    }
}

impl Related<api::Entity> for Entity {
    fn to() -> RelationDef { Relation::Api.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_parameter(p: &str) -> Result<(), ModelError> {
    if p.trim().is_empty() { return Err(ModelError::validation("parameter must not be empty")); }
    Ok(())
}

pub async fn create<C: ConnectionTrait>(db: &C, api_id: i32, parameter: &str) -> Result<Model, ModelError> {
    validate_parameter(parameter)?;
    let am = ActiveModel {
        api_id: Set(api_id),
        parameter: Set(parameter.to_string()),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

/// Parameters of every api in `api_ids`, in one query.
pub async fn list_for_apis<C: ConnectionTrait>(db: &C, api_ids: &[i32]) -> Result<Vec<Model>, ModelError> {
    if api_ids.is_empty() { return Ok(Vec::new()); }
    Ok(Entity::find()
        .filter(Column::ApiId.is_in(api_ids.iter().copied()))
        .order_by_asc(Column::Id)
        .all(db)
        .await?)
}

pub async fn delete_for_api<C: ConnectionTrait>(db: &C, api_id: i32) -> Result<u64, ModelError> {
    let res = Entity::delete_many().filter(Column::ApiId.eq(api_id)).exec(db).await?;
    Ok(res.rows_affected)
}
