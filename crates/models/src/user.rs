use sea_orm::{entity::prelude::*, ConnectionTrait, Set};

use crate::errors::ModelError;
use crate::{api, dashboard};

/// A registered user. Not `Serialize`; responses go through a view type
/// without the password hash.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "Text")]
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    #[sea_orm(column_type = "Text")]
    pub password_hash: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Api,
    Dashboard,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Api => Entity::has_many(api::Entity).into(),
            Relation::Dashboard => Entity::has_many(dashboard::Entity).into(),
        }
    }
}

impl Related<api::Entity> for Entity {
    fn to() -> RelationDef { Relation::Api.def() }
}

impl Related<dashboard::Entity> for Entity {
    fn to() -> RelationDef { Relation::Dashboard.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_name(name: &str) -> Result<(), ModelError> {
    if name.trim().is_empty() { return Err(ModelError::validation("name required")); }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), ModelError> {
    let email = email.trim();
    if email.is_empty() { return Err(ModelError::validation("email required")); }
    if !email.contains('@') { return Err(ModelError::validation("invalid email")); }
    if email.len() > 255 { return Err(ModelError::validation("email too long (<=255)")); }
    Ok(())
}

pub async fn create<C: ConnectionTrait>(db: &C, name: &str, email: &str, password_hash: &str) -> Result<Model, ModelError> {
    validate_name(name)?;
    validate_email(email)?;
    if password_hash.is_empty() { return Err(ModelError::validation("password hash required")); }
    let am = ActiveModel {
        name: Set(name.trim().to_string()),
        email: Set(email.trim().to_string()),
        password_hash: Set(password_hash.to_string()),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

pub async fn find_by_email<C: ConnectionTrait>(db: &C, email: &str) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find().filter(Column::Email.eq(email.trim())).one(db).await?)
}

/// Update name and email; the password is not touched. `None` if no such user.
pub async fn update_profile<C: ConnectionTrait>(db: &C, id: i32, name: &str, email: &str) -> Result<Option<Model>, ModelError> {
    validate_name(name)?;
    validate_email(email)?;
    let Some(found) = Entity::find_by_id(id).one(db).await? else { return Ok(None) };
    let mut am: ActiveModel = found.into();
    am.name = Set(name.trim().to_string());
    am.email = Set(email.trim().to_string());
    Ok(Some(am.update(db).await?))
}

/// Remove the user row; apis, parameters, dashboards and panes go with it
/// through the cascading foreign keys. Returns whether a row was deleted.
pub async fn hard_delete<C: ConnectionTrait>(db: &C, id: i32) -> Result<bool, ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await?;
    Ok(res.rows_affected > 0)
}
