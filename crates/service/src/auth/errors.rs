use thiserror::Error;

use crate::errors::ServiceError;

/// Message returned for every failed login, whichever half was wrong.
pub const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// Business errors for auth workflows
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("invalid credentials")]
    Unauthorized,
    #[error("hashing error: {0}")]
    HashError(String),
    #[error("repository error: {0}")]
    Repository(String),
}

impl AuthError {
    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            AuthError::Validation(_) => 1001,
            AuthError::Unauthorized => 1004,
            AuthError::HashError(_) => 1101,
            AuthError::Repository(_) => 1200,
        }
    }
}

impl From<AuthError> for ServiceError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::Validation(msg) => ServiceError::Validation(msg),
            AuthError::Unauthorized => ServiceError::Unauthorized(INVALID_CREDENTIALS.into()),
            AuthError::HashError(msg) => ServiceError::Internal(msg),
            AuthError::Repository(msg) => ServiceError::Db(msg),
        }
    }
}
