use axum::{extract::State, Json};

use service::dashboard_service;
use service::domain::{AddPaneInput, CreateDashboardInput, DashboardDetail, DashboardView, RenameDashboardInput};

use crate::errors::ApiError;
use crate::extract::{JsonBody, PathParam};
use crate::routes::{Message, ServerState};

#[utoipa::path(
    post, path = "/api/go/createDashboard", tag = "dashboards",
    request_body = crate::openapi::CreateDashboardDoc,
    responses((status = 200, description = "Created", body = crate::openapi::DashboardDoc), (status = 400, description = "Bad Request"))
)]
pub async fn create_dashboard(
    State(state): State<ServerState>,
    JsonBody(input): JsonBody<CreateDashboardInput>,
) -> Result<Json<DashboardView>, ApiError> {
    Ok(Json(dashboard_service::create_dashboard(&state.db, input).await?))
}

#[utoipa::path(
    get, path = "/api/go/dashboards/user/{userId}", tag = "dashboards",
    params(("userId" = i32, Path, description = "Owner id")),
    responses((status = 200, description = "Dashboards of the user", body = [crate::openapi::DashboardDoc]))
)]
pub async fn list_dashboards(State(state): State<ServerState>, PathParam(user_id): PathParam<i32>) -> Result<Json<Vec<DashboardView>>, ApiError> {
    Ok(Json(dashboard_service::list_dashboards_by_user(&state.db, user_id).await?))
}

#[utoipa::path(
    get, path = "/api/go/dashboards/{id}", tag = "dashboards",
    params(("id" = i32, Path, description = "Dashboard id")),
    responses((status = 200, description = "Dashboard with panes", body = crate::openapi::DashboardDetailDoc), (status = 404, description = "Not Found"))
)]
pub async fn get_dashboard(State(state): State<ServerState>, PathParam(id): PathParam<i32>) -> Result<Json<DashboardDetail>, ApiError> {
    Ok(Json(dashboard_service::get_dashboard(&state.db, id).await?))
}

#[utoipa::path(
    put, path = "/api/go/dashboards/{id}", tag = "dashboards",
    params(("id" = i32, Path, description = "Dashboard id")),
    request_body = crate::openapi::RenameDashboardDoc,
    responses((status = 200, description = "Renamed", body = crate::openapi::DashboardDoc), (status = 404, description = "Not Found"))
)]
pub async fn rename_dashboard(
    State(state): State<ServerState>,
    PathParam(id): PathParam<i32>,
    JsonBody(input): JsonBody<RenameDashboardInput>,
) -> Result<Json<DashboardView>, ApiError> {
    Ok(Json(dashboard_service::rename_dashboard(&state.db, id, input).await?))
}

#[utoipa::path(
    delete, path = "/api/go/dashboards/{id}", tag = "dashboards",
    params(("id" = i32, Path, description = "Dashboard id")),
    responses((status = 200, description = "Deleted", body = crate::openapi::MessageDoc), (status = 404, description = "Not Found"))
)]
pub async fn delete_dashboard(State(state): State<ServerState>, PathParam(id): PathParam<i32>) -> Result<Json<Message>, ApiError> {
    dashboard_service::delete_dashboard(&state.db, id).await?;
    Ok(Json(Message::new("Dashboard deleted successfully")))
}

#[utoipa::path(
    post, path = "/api/go/dashboards/{dashboardId}/panes", tag = "dashboards",
    params(("dashboardId" = i32, Path, description = "Dashboard id")),
    request_body = crate::openapi::AddPaneDoc,
    responses((status = 200, description = "Attached", body = crate::openapi::MessageDoc), (status = 500, description = "Unknown dashboard or api"))
)]
pub async fn add_pane(
    State(state): State<ServerState>,
    PathParam(dashboard_id): PathParam<i32>,
    JsonBody(input): JsonBody<AddPaneInput>,
) -> Result<Json<Message>, ApiError> {
    dashboard_service::add_pane(&state.db, dashboard_id, input).await?;
    Ok(Json(Message::new("Pane added to dashboard successfully")))
}

#[utoipa::path(
    delete, path = "/api/go/dashboards/{dashboardId}/panes/{apiId}", tag = "dashboards",
    params(("dashboardId" = i32, Path, description = "Dashboard id"), ("apiId" = i32, Path, description = "Api id")),
    responses((status = 200, description = "Detached", body = crate::openapi::MessageDoc), (status = 404, description = "Pane not attached"))
)]
pub async fn remove_pane(
    State(state): State<ServerState>,
    PathParam((dashboard_id, api_id)): PathParam<(i32, i32)>,
) -> Result<Json<Message>, ApiError> {
    dashboard_service::remove_pane(&state.db, dashboard_id, api_id).await?;
    Ok(Json(Message::new("Pane removed from dashboard successfully")))
}
