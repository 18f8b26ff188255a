use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String, pub database: String }

#[derive(ToSchema)]
pub struct MessageDoc { pub message: String }

#[derive(ToSchema)]
pub struct UserDoc { pub id: i32, pub name: String, pub email: String }

#[derive(ToSchema)]
pub struct CreateUserDoc { pub name: String, pub email: String, pub password: String }

#[derive(ToSchema)]
pub struct UpdateUserDoc { pub name: String, pub email: String }

#[derive(ToSchema)]
pub struct LoginDoc { pub email: String, pub password: String }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserIdDoc { pub user_id: i32 }

#[derive(Serialize, ToSchema)]
pub struct ParameterDoc { pub parameter: String }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApiViewDoc {
    pub api_id: i32,
    pub user_id: i32,
    pub api_name: String,
    pub api_string: String,
    pub api_key: Option<String>,
    pub graph_type: String,
    pub pane_x: i32,
    pub pane_y: i32,
    pub parameters: Vec<ParameterDoc>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateApiDoc {
    pub user_id: i32,
    pub api_name: String,
    pub api_string: String,
    pub api_key: Option<String>,
    pub graph_type: String,
    pub pane_x: Option<i32>,
    pub pane_y: Option<i32>,
    pub parameters: Option<Vec<ParameterDoc>>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardDoc { pub id: i32, pub user_id: i32, pub name: String }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardDetailDoc { pub id: i32, pub user_id: i32, pub name: String, pub panes: Vec<ApiViewDoc> }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateDashboardDoc { pub user_id: i32, pub name: String }

#[derive(ToSchema)]
pub struct RenameDashboardDoc { pub name: String }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddPaneDoc { pub api_id: i32 }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::users::list_users,
        crate::routes::users::create_user,
        crate::routes::users::get_user,
        crate::routes::users::update_user,
        crate::routes::users::delete_user,
        crate::routes::users::get_user_id,
        crate::routes::auth::login,
        crate::routes::apis::create_api,
        crate::routes::apis::delete_api,
        crate::routes::apis::list_apis,
        crate::routes::dashboards::create_dashboard,
        crate::routes::dashboards::list_dashboards,
        crate::routes::dashboards::get_dashboard,
        crate::routes::dashboards::rename_dashboard,
        crate::routes::dashboards::delete_dashboard,
        crate::routes::dashboards::add_pane,
        crate::routes::dashboards::remove_pane,
    ),
    components(
        schemas(
            HealthResponse,
            MessageDoc,
            UserDoc,
            CreateUserDoc,
            UpdateUserDoc,
            LoginDoc,
            UserIdDoc,
            ParameterDoc,
            ApiViewDoc,
            CreateApiDoc,
            DashboardDoc,
            DashboardDetailDoc,
            CreateDashboardDoc,
            RenameDashboardDoc,
            AddPaneDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "users"),
        (name = "auth"),
        (name = "apis"),
        (name = "dashboards")
    )
)]
pub struct ApiDoc;

impl ApiDoc {
    /// Prefix the resource paths are documented under.
    pub const DEFAULT_PREFIX: &'static str = "/api/go";

    /// The document with resource paths moved under `api_prefix`.
    pub fn with_prefix(api_prefix: &str) -> utoipa::openapi::OpenApi {
        let mut doc = Self::openapi();
        if api_prefix != Self::DEFAULT_PREFIX {
            let paths = std::mem::take(&mut doc.paths.paths);
            doc.paths.paths = paths
                .into_iter()
                .map(|(path, item)| match path.strip_prefix(Self::DEFAULT_PREFIX) {
                    Some(rest) => (format!("{api_prefix}{rest}"), item),
                    None => (path, item),
                })
                .collect();
        }
        doc
    }
}
