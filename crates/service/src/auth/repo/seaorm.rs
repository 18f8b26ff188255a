use sea_orm::{DatabaseConnection, EntityTrait};

use crate::auth::domain::{AuthUser, Credentials};
use crate::auth::errors::AuthError;
use crate::auth::repository::AuthRepository;

pub struct SeaOrmAuthRepository {
    pub db: DatabaseConnection,
}

#[async_trait::async_trait]
impl AuthRepository for SeaOrmAuthRepository {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<AuthUser>, AuthError> {
        let res = models::user::find_by_email(&self.db, email)
            .await
            .map_err(|e| AuthError::Repository(e.to_string()))?;
        Ok(res.map(|u| AuthUser { id: u.id, name: u.name, email: u.email }))
    }

    async fn get_credentials(&self, user_id: i32) -> Result<Option<Credentials>, AuthError> {
        let res = models::user::Entity::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(|e| AuthError::Repository(e.to_string()))?;
        Ok(res.map(|u| Credentials { user_id: u.id, password_hash: u.password_hash }))
    }
}
