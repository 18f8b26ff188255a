use axum::{extract::State, Json};
use tracing::info;

use service::domain::{CreateUserInput, UpdateUserInput, UserIdView, UserView};
use service::user_service;

use crate::errors::ApiError;
use crate::extract::{JsonBody, PathParam};
use crate::routes::{Message, ServerState};

#[utoipa::path(get, path = "/api/go/users", tag = "users", responses((status = 200, description = "All users", body = [crate::openapi::UserDoc])))]
pub async fn list_users(State(state): State<ServerState>) -> Result<Json<Vec<UserView>>, ApiError> {
    let users = user_service::list_users(&state.db).await?;
    info!(count = users.len(), "list users");
    Ok(Json(users))
}

#[utoipa::path(
    post, path = "/api/go/users", tag = "users",
    request_body = crate::openapi::CreateUserDoc,
    responses(
        (status = 200, description = "Created", body = crate::openapi::UserDoc),
        (status = 400, description = "Bad Request"),
        (status = 409, description = "Email already in use")
    )
)]
pub async fn create_user(State(state): State<ServerState>, JsonBody(input): JsonBody<CreateUserInput>) -> Result<Json<UserView>, ApiError> {
    Ok(Json(user_service::create_user(&state.db, input).await?))
}

#[utoipa::path(
    get, path = "/api/go/users/{id}", tag = "users",
    params(("id" = i32, Path, description = "User id")),
    responses((status = 200, description = "Found", body = crate::openapi::UserDoc), (status = 404, description = "Not Found"))
)]
pub async fn get_user(State(state): State<ServerState>, PathParam(id): PathParam<i32>) -> Result<Json<UserView>, ApiError> {
    Ok(Json(user_service::get_user(&state.db, id).await?))
}

#[utoipa::path(
    put, path = "/api/go/users/{id}", tag = "users",
    params(("id" = i32, Path, description = "User id")),
    request_body = crate::openapi::UpdateUserDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::UserDoc),
        (status = 400, description = "Bad Request"),
        (status = 404, description = "Not Found"),
        (status = 409, description = "Email already in use")
    )
)]
pub async fn update_user(
    State(state): State<ServerState>,
    PathParam(id): PathParam<i32>,
    JsonBody(input): JsonBody<UpdateUserInput>,
) -> Result<Json<UserView>, ApiError> {
    Ok(Json(user_service::update_user(&state.db, id, input).await?))
}

#[utoipa::path(
    delete, path = "/api/go/users/{id}", tag = "users",
    params(("id" = i32, Path, description = "User id")),
    responses((status = 200, description = "Deleted", body = crate::openapi::MessageDoc), (status = 404, description = "Not Found"))
)]
pub async fn delete_user(State(state): State<ServerState>, PathParam(id): PathParam<i32>) -> Result<Json<Message>, ApiError> {
    user_service::delete_user(&state.db, id).await?;
    Ok(Json(Message::new("User deleted")))
}

#[utoipa::path(
    get, path = "/api/go/getID/{email}", tag = "users",
    params(("email" = String, Path, description = "User email")),
    responses((status = 200, description = "Found", body = crate::openapi::UserIdDoc), (status = 404, description = "Not Found"))
)]
pub async fn get_user_id(State(state): State<ServerState>, PathParam(email): PathParam<String>) -> Result<Json<UserIdView>, ApiError> {
    Ok(Json(user_service::get_user_id_by_email(&state.db, &email).await?))
}
