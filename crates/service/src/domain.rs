//! Request and response shapes shared by the stores and the HTTP layer.
//! Field names follow the camelCase wire format.

use serde::{Deserialize, Serialize};

use models::{api, dashboard, parameter, user};

/// Public view of a user; the password hash never leaves the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserView {
    pub id: i32,
    pub name: String,
    pub email: String,
}

impl From<user::Model> for UserView {
    fn from(m: user::Model) -> Self { Self { id: m.id, name: m.name, email: m.email } }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateUserInput {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserIdView {
    pub user_id: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterView {
    pub parameter: String,
}

/// An api together with its parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiView {
    pub api_id: i32,
    pub user_id: i32,
    pub api_name: String,
    pub api_string: String,
    pub api_key: Option<String>,
    pub graph_type: String,
    pub pane_x: i32,
    pub pane_y: i32,
    pub parameters: Vec<ParameterView>,
}

impl ApiView {
    pub fn new(m: api::Model, params: Vec<parameter::Model>) -> Self {
        Self {
            api_id: m.id,
            user_id: m.user_id,
            api_name: m.api_name,
            api_string: m.api_string,
            api_key: m.api_key,
            graph_type: m.graph_type,
            pane_x: m.pane_x,
            pane_y: m.pane_y,
            parameters: params.into_iter().map(|p| ParameterView { parameter: p.parameter }).collect(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateApiInput {
    pub user_id: i32,
    pub api_name: String,
    pub api_string: String,
    #[serde(default)]
    pub api_key: Option<String>,
    pub graph_type: String,
    #[serde(default)]
    pub pane_x: i32,
    #[serde(default)]
    pub pane_y: i32,
    #[serde(default)]
    pub parameters: Vec<ParameterView>,
}

impl CreateApiInput {
    pub(crate) fn to_new_api(&self) -> api::NewApi {
        api::NewApi {
            user_id: self.user_id,
            api_name: self.api_name.clone(),
            api_string: self.api_string.clone(),
            api_key: self.api_key.clone(),
            graph_type: self.graph_type.clone(),
            pane_x: self.pane_x,
            pane_y: self.pane_y,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
}

impl From<dashboard::Model> for DashboardView {
    fn from(m: dashboard::Model) -> Self { Self { id: m.id, user_id: m.user_id, name: m.name } }
}

/// A dashboard with every api placed on it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardDetail {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub panes: Vec<ApiView>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDashboardInput {
    pub user_id: i32,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RenameDashboardInput {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddPaneInput {
    pub api_id: i32,
}
