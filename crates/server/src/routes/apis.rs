use axum::{extract::State, Json};

use service::api_service;
use service::domain::{ApiView, CreateApiInput};

use crate::errors::ApiError;
use crate::extract::{JsonBody, PathParam};
use crate::routes::{Message, ServerState};

#[utoipa::path(
    post, path = "/api/go/createAPI", tag = "apis",
    request_body = crate::openapi::CreateApiDoc,
    responses(
        (status = 200, description = "Created with parameters", body = crate::openapi::ApiViewDoc),
        (status = 400, description = "Bad Request"),
        (status = 500, description = "Insert failed, nothing persisted")
    )
)]
pub async fn create_api(State(state): State<ServerState>, JsonBody(input): JsonBody<CreateApiInput>) -> Result<Json<ApiView>, ApiError> {
    Ok(Json(api_service::create_api(&state.db, input).await?))
}

#[utoipa::path(
    delete, path = "/api/go/deleteAPI/{index}", tag = "apis",
    params(("index" = i32, Path, description = "Api id")),
    responses((status = 200, description = "Deleted", body = crate::openapi::MessageDoc), (status = 404, description = "Not Found"))
)]
pub async fn delete_api(State(state): State<ServerState>, PathParam(index): PathParam<i32>) -> Result<Json<Message>, ApiError> {
    api_service::delete_api(&state.db, index).await?;
    Ok(Json(Message::new("API deleted successfully")))
}

#[utoipa::path(
    get, path = "/api/go/apis/{userId}", tag = "apis",
    params(("userId" = i32, Path, description = "Owner id")),
    responses((status = 200, description = "Apis with parameters", body = [crate::openapi::ApiViewDoc]))
)]
pub async fn list_apis(State(state): State<ServerState>, PathParam(user_id): PathParam<i32>) -> Result<Json<Vec<ApiView>>, ApiError> {
    Ok(Json(api_service::list_apis_by_user(&state.db, user_id).await?))
}
