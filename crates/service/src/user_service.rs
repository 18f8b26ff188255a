use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder, SqlErr};
use tracing::{info, instrument};

use models::errors::ModelError;
use models::user;
use crate::auth::password::hash_password;
use crate::domain::{CreateUserInput, UpdateUserInput, UserIdView, UserView};
use crate::errors::ServiceError;

const EMAIL_TAKEN: &str = "email already in use";

/// A unique violation on insert/update can only come from the email index.
fn email_conflict(e: ModelError) -> ServiceError {
    match e {
        ModelError::Db(ref err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
            ServiceError::Conflict(EMAIL_TAKEN.into())
        }
        other => other.into(),
    }
}

/// List every user.
pub async fn list_users(db: &DatabaseConnection) -> Result<Vec<UserView>, ServiceError> {
    let users = user::Entity::find().order_by_asc(user::Column::Id).all(db).await?;
    Ok(users.into_iter().map(UserView::from).collect())
}

/// Create a user, storing an argon2 hash of the password.
#[instrument(skip(db, input), fields(email = %input.email))]
pub async fn create_user(db: &DatabaseConnection, input: CreateUserInput) -> Result<UserView, ServiceError> {
    user::validate_name(&input.name)?;
    user::validate_email(&input.email)?;
    if user::find_by_email(db, &input.email).await?.is_some() {
        return Err(ServiceError::Conflict(EMAIL_TAKEN.into()));
    }
    let hash = hash_password(&input.password)?;
    let created = user::create(db, &input.name, &input.email, &hash).await.map_err(email_conflict)?;
    info!(user_id = created.id, email = %created.email, "user_created");
    Ok(created.into())
}

/// Get a user by id.
pub async fn get_user(db: &DatabaseConnection, id: i32) -> Result<UserView, ServiceError> {
    user::Entity::find_by_id(id)
        .one(db)
        .await?
        .map(UserView::from)
        .ok_or_else(|| ServiceError::not_found("user"))
}

/// Update a user's name and email.
#[instrument(skip(db, input))]
pub async fn update_user(db: &DatabaseConnection, id: i32, input: UpdateUserInput) -> Result<UserView, ServiceError> {
    if let Some(other) = user::find_by_email(db, &input.email).await? {
        if other.id != id {
            return Err(ServiceError::Conflict(EMAIL_TAKEN.into()));
        }
    }
    let updated = user::update_profile(db, id, &input.name, &input.email)
        .await
        .map_err(email_conflict)?
        .ok_or_else(|| ServiceError::not_found("user"))?;
    info!(user_id = updated.id, "user_updated");
    Ok(updated.into())
}

/// Delete a user; owned apis and dashboards cascade.
#[instrument(skip(db))]
pub async fn delete_user(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    if !user::hard_delete(db, id).await? {
        return Err(ServiceError::not_found("user"));
    }
    info!(user_id = id, "user_deleted");
    Ok(())
}

/// Resolve a user id from an email address.
pub async fn get_user_id_by_email(db: &DatabaseConnection, email: &str) -> Result<UserIdView, ServiceError> {
    user::find_by_email(db, email)
        .await?
        .map(|u| UserIdView { user_id: u.id })
        .ok_or_else(|| ServiceError::not_found("user"))
}
