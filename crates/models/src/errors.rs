use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("database error: {0}")]
    Db(#[from] DbErr),
}

impl ModelError {
    pub fn validation(msg: impl Into<String>) -> Self { Self::Validation(msg.into()) }
}
