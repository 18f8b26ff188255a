use std::time::Duration;

use axum::{
    extract::State,
    http::StatusCode,
    middleware,
    routing::{delete, get, post},
    Json, Router,
};
use sea_orm::DatabaseConnection;
use serde::Serialize;
use tower_http::{
    cors::CorsLayer,
    timeout::TimeoutLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{warn, Level};

use common::types::Health;

use crate::errors::{json_error_body, ApiError};
use crate::openapi::ApiDoc;

pub mod apis;
pub mod auth;
pub mod dashboards;
pub mod users;

/// Shared handler state: the process-wide connection pool.
#[derive(Clone)]
pub struct ServerState {
    pub db: DatabaseConnection,
}

/// `{"message": ...}` acknowledgement body.
#[derive(Debug, Serialize)]
pub struct Message {
    pub message: &'static str,
}

impl Message {
    pub fn new(message: &'static str) -> Self { Self { message } }
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse), (status = 503, description = "Database unavailable")))]
pub async fn health(State(state): State<ServerState>) -> (StatusCode, Json<Health>) {
    match models::db::ping(&state.db).await {
        Ok(()) => (StatusCode::OK, Json(Health::ok())),
        Err(e) => {
            warn!(error = %e, "health check: database ping failed");
            (StatusCode::SERVICE_UNAVAILABLE, Json(Health::degraded()))
        }
    }
}

async fn route_not_found() -> ApiError {
    ApiError::new(StatusCode::NOT_FOUND, "Route not found")
}

async fn method_not_allowed() -> ApiError {
    ApiError::new(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}

/// Routes relative to the api prefix.
fn api_routes() -> Router<ServerState> {
    Router::new()
        .route("/users", get(users::list_users).post(users::create_user))
        .route("/users/:id", get(users::get_user).put(users::update_user).delete(users::delete_user))
        .route("/login", post(auth::login))
        .route("/getID/:email", get(users::get_user_id))
        .route("/createAPI", post(apis::create_api))
        .route("/deleteAPI/:index", delete(apis::delete_api))
        .route("/apis/:user_id", get(apis::list_apis))
        .route("/createDashboard", post(dashboards::create_dashboard))
        .route("/dashboards/user/:user_id", get(dashboards::list_dashboards))
        .route(
            "/dashboards/:id",
            get(dashboards::get_dashboard).put(dashboards::rename_dashboard).delete(dashboards::delete_dashboard),
        )
        .route("/dashboards/:id/panes", post(dashboards::add_pane))
        .route("/dashboards/:id/panes/:api_id", delete(dashboards::remove_pane))
}

/// Build the full application router: health, OpenAPI document and the
/// resource routes under `api_prefix` (empty prefix mounts them at the root).
pub fn build_router(state: ServerState, cors: CorsLayer, api_prefix: &str, request_timeout: Duration) -> Router {
    let doc = ApiDoc::with_prefix(api_prefix);
    let public = Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(move || {
            let doc = doc.clone();
            async move { Json(doc) }
        }));

    let app = if api_prefix.is_empty() {
        public.merge(api_routes())
    } else {
        public.nest(api_prefix, api_routes())
    };

    app.fallback(route_not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .with_state(state)
        .layer(TimeoutLayer::new(request_timeout))
        .layer(middleware::map_response(json_error_body))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 5xx and timeouts
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                ),
        )
}
