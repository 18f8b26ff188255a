use std::sync::Arc;

use axum::{extract::State, Json};

use service::auth::domain::LoginInput;
use service::auth::repo::seaorm::SeaOrmAuthRepository;
use service::auth::AuthService;
use service::domain::UserView;
use service::errors::ServiceError;

use crate::errors::ApiError;
use crate::extract::JsonBody;
use crate::routes::ServerState;

#[utoipa::path(
    post, path = "/api/go/login", tag = "auth",
    request_body = crate::openapi::LoginDoc,
    responses((status = 200, description = "Logged In", body = crate::openapi::UserDoc), (status = 401, description = "Unauthorized"))
)]
pub async fn login(State(state): State<ServerState>, JsonBody(input): JsonBody<LoginInput>) -> Result<Json<UserView>, ApiError> {
    let repo = Arc::new(SeaOrmAuthRepository { db: state.db.clone() });
    let user = AuthService::new(repo)
        .login(input)
        .await
        .map_err(ServiceError::from)?;
    Ok(Json(UserView { id: user.id, name: user.name, email: user.email }))
}
