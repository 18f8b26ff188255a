use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use super::domain::{AuthUser, LoginInput};
use super::errors::AuthError;
use super::password::verify_password;
use super::repository::AuthRepository;

/// Auth business service independent of web framework
pub struct AuthService<R: AuthRepository> {
    repo: Arc<R>,
}

impl<R: AuthRepository> AuthService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Check an email/password pair against the stored argon2 hash.
    ///
    /// Unknown email and wrong password are indistinguishable to the caller.
    ///
    /// # Examples
    /// ```
    /// use service::auth::{service::AuthService, repository::mock::MockAuthRepository};
    /// use service::auth::domain::LoginInput;
    /// use std::sync::Arc;
    /// let repo = Arc::new(MockAuthRepository::default());
    /// repo.add_user("U", "u@e.com", "Passw0rd").unwrap();
    /// let svc = AuthService::new(repo);
    /// let user = tokio_test::block_on(svc.login(LoginInput { email: "u@e.com".into(), password: "Passw0rd".into() })).unwrap();
    /// assert_eq!(user.email, "u@e.com");
    /// ```
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn login(&self, input: LoginInput) -> Result<AuthUser, AuthError> {
        let result = self.verify(&input).await;
        if let Err(e) = &result {
            warn!(code = e.code(), error = %e, "login_failed");
        }
        result
    }

    async fn verify(&self, input: &LoginInput) -> Result<AuthUser, AuthError> {
        let user = self.repo
            .find_user_by_email(input.email.trim())
            .await?
            .ok_or(AuthError::Unauthorized)?;

        let cred = self.repo
            .get_credentials(user.id)
            .await?
            .ok_or(AuthError::Unauthorized)?;

        if !verify_password(&input.password, &cred.password_hash)? {
            debug!(user_id = user.id, "password mismatch");
            return Err(AuthError::Unauthorized);
        }

        info!(user_id = user.id, email = %user.email, "user_logged_in");
        Ok(user)
    }
}
