use sea_orm::{DatabaseConnection, EntityTrait, ModelTrait, QueryOrder};
use tracing::{info, instrument};

use models::{api, dashboard, dashboard_pane};
use crate::api_service::load_with_parameters;
use crate::domain::{AddPaneInput, CreateDashboardInput, DashboardDetail, DashboardView, RenameDashboardInput};
use crate::errors::ServiceError;

#[instrument(skip(db, input), fields(user_id = input.user_id))]
pub async fn create_dashboard(db: &DatabaseConnection, input: CreateDashboardInput) -> Result<DashboardView, ServiceError> {
    let created = dashboard::create(db, input.user_id, &input.name).await?;
    info!(dashboard_id = created.id, "dashboard_created");
    Ok(created.into())
}

pub async fn list_dashboards_by_user(db: &DatabaseConnection, user_id: i32) -> Result<Vec<DashboardView>, ServiceError> {
    let rows = dashboard::list_by_user(db, user_id).await?;
    Ok(rows.into_iter().map(DashboardView::from).collect())
}

/// The dashboard plus every api placed on it, parameters included.
pub async fn get_dashboard(db: &DatabaseConnection, id: i32) -> Result<DashboardDetail, ServiceError> {
    let found = dashboard::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("dashboard"))?;
    let apis = found
        .find_related(api::Entity)
        .order_by_asc(api::Column::Id)
        .all(db)
        .await?;
    let panes = load_with_parameters(db, apis).await?;
    Ok(DashboardDetail { id: found.id, user_id: found.user_id, name: found.name, panes })
}

#[instrument(skip(db, input))]
pub async fn rename_dashboard(db: &DatabaseConnection, id: i32, input: RenameDashboardInput) -> Result<DashboardView, ServiceError> {
    let updated = dashboard::rename(db, id, &input.name)
        .await?
        .ok_or_else(|| ServiceError::not_found("dashboard"))?;
    info!(dashboard_id = id, "dashboard_renamed");
    Ok(updated.into())
}

/// Pane rows cascade; the apis themselves stay.
#[instrument(skip(db))]
pub async fn delete_dashboard(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    if !dashboard::hard_delete(db, id).await? {
        return Err(ServiceError::not_found("dashboard"));
    }
    info!(dashboard_id = id, "dashboard_deleted");
    Ok(())
}

/// Place an api on a dashboard. Ownership is not checked: any api may be
/// placed on any dashboard as long as both rows exist.
#[instrument(skip(db, input), fields(api_id = input.api_id))]
pub async fn add_pane(db: &DatabaseConnection, dashboard_id: i32, input: AddPaneInput) -> Result<(), ServiceError> {
    let inserted = dashboard_pane::attach(db, dashboard_id, input.api_id).await?;
    info!(dashboard_id, api_id = input.api_id, inserted, "pane_added");
    Ok(())
}

#[instrument(skip(db))]
pub async fn remove_pane(db: &DatabaseConnection, dashboard_id: i32, api_id: i32) -> Result<(), ServiceError> {
    if !dashboard_pane::detach(db, dashboard_id, api_id).await? {
        return Err(ServiceError::not_found("pane"));
    }
    info!(dashboard_id, api_id, "pane_removed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api_service;
    use crate::domain::{CreateApiInput, CreateUserInput, ParameterView};
    use crate::test_support::get_db;
    use crate::user_service;

    async fn seed(db: &DatabaseConnection) -> Result<(i32, i32), ServiceError> {
        let u = user_service::create_user(db, CreateUserInput { name: "A".into(), email: "a@x.com".into(), password: "p".into() }).await?;
        let a = api_service::create_api(db, CreateApiInput {
            user_id: u.id,
            api_name: "Weather".into(),
            api_string: "https://w".into(),
            api_key: None,
            graph_type: "bar".into(),
            pane_x: 1,
            pane_y: 2,
            parameters: vec![ParameterView { parameter: "city".into() }, ParameterView { parameter: "units".into() }],
        })
        .await?;
        Ok((u.id, a.api_id))
    }

    #[tokio::test]
    async fn dashboard_crud() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let (uid, _) = seed(&db).await?;

        let d = create_dashboard(&db, CreateDashboardInput { user_id: uid, name: "Main".into() }).await?;
        assert_eq!(d.user_id, uid);
        create_dashboard(&db, CreateDashboardInput { user_id: uid, name: "Second".into() }).await?;
        assert_eq!(list_dashboards_by_user(&db, uid).await?.len(), 2);

        let renamed = rename_dashboard(&db, d.id, RenameDashboardInput { name: "Renamed".into() }).await?;
        assert_eq!(renamed.name, "Renamed");
        assert_eq!(get_dashboard(&db, d.id).await?.name, "Renamed");

        delete_dashboard(&db, d.id).await?;
        assert!(matches!(get_dashboard(&db, d.id).await, Err(ServiceError::NotFound(_))));
        assert!(matches!(delete_dashboard(&db, d.id).await, Err(ServiceError::NotFound(_))));
        let rn = rename_dashboard(&db, d.id, RenameDashboardInput { name: "X".into() }).await;
        assert!(matches!(rn, Err(ServiceError::NotFound(_))));
        assert_eq!(list_dashboards_by_user(&db, uid).await?.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn create_requires_name_and_owner() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let (uid, _) = seed(&db).await?;
        let blank = create_dashboard(&db, CreateDashboardInput { user_id: uid, name: "  ".into() }).await;
        assert!(matches!(blank, Err(ServiceError::Validation(_))));
        let orphan = create_dashboard(&db, CreateDashboardInput { user_id: 77, name: "D".into() }).await;
        assert!(matches!(orphan, Err(ServiceError::Db(_))));
        Ok(())
    }

    #[tokio::test]
    async fn attach_and_detach_pane() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let (uid, api_id) = seed(&db).await?;
        let d = create_dashboard(&db, CreateDashboardInput { user_id: uid, name: "Main".into() }).await?;
        assert!(get_dashboard(&db, d.id).await?.panes.is_empty());

        add_pane(&db, d.id, AddPaneInput { api_id }).await?;
        add_pane(&db, d.id, AddPaneInput { api_id }).await?;

        let detail = get_dashboard(&db, d.id).await?;
        assert_eq!(detail.panes.len(), 1);
        assert_eq!(detail.panes[0].api_id, api_id);
        let mut params: Vec<_> = detail.panes[0].parameters.iter().map(|p| p.parameter.as_str()).collect();
        params.sort();
        assert_eq!(params, vec!["city", "units"]);

        remove_pane(&db, d.id, api_id).await?;
        assert!(get_dashboard(&db, d.id).await?.panes.is_empty());
        assert!(matches!(remove_pane(&db, d.id, api_id).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn pane_with_dangling_ids_fails() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let (uid, api_id) = seed(&db).await?;
        let d = create_dashboard(&db, CreateDashboardInput { user_id: uid, name: "Main".into() }).await?;
        assert!(matches!(add_pane(&db, d.id, AddPaneInput { api_id: 4040 }).await, Err(ServiceError::Db(_))));
        assert!(matches!(add_pane(&db, 4040, AddPaneInput { api_id }).await, Err(ServiceError::Db(_))));
        Ok(())
    }

    #[tokio::test]
    async fn deleting_dashboard_keeps_apis() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let (uid, api_id) = seed(&db).await?;
        let d = create_dashboard(&db, CreateDashboardInput { user_id: uid, name: "Main".into() }).await?;
        add_pane(&db, d.id, AddPaneInput { api_id }).await?;

        delete_dashboard(&db, d.id).await?;

        let apis = api_service::list_apis_by_user(&db, uid).await?;
        assert_eq!(apis.len(), 1);
        assert_eq!(apis[0].api_id, api_id);
        Ok(())
    }

    #[tokio::test]
    async fn panes_may_reference_other_users_apis() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let (_, api_id) = seed(&db).await?;
        let other = user_service::create_user(&db, CreateUserInput { name: "B".into(), email: "b@x.com".into(), password: "p".into() }).await?;
        let d = create_dashboard(&db, CreateDashboardInput { user_id: other.id, name: "Theirs".into() }).await?;

        add_pane(&db, d.id, AddPaneInput { api_id }).await?;
        assert_eq!(get_dashboard(&db, d.id).await?.panes.len(), 1);
        Ok(())
    }
}
