use std::collections::HashMap;

use sea_orm::{ConnectionTrait, DatabaseConnection, EntityTrait, TransactionTrait};
use tracing::{info, instrument};

use models::{api, dashboard_pane, parameter};
use crate::domain::{ApiView, CreateApiInput};
use crate::errors::ServiceError;

/// Attach parameters to their apis with one batched query, keeping api order.
pub(crate) async fn load_with_parameters<C: ConnectionTrait>(db: &C, apis: Vec<api::Model>) -> Result<Vec<ApiView>, ServiceError> {
    let ids: Vec<i32> = apis.iter().map(|a| a.id).collect();
    let mut by_api: HashMap<i32, Vec<parameter::Model>> = HashMap::new();
    for p in parameter::list_for_apis(db, &ids).await? {
        by_api.entry(p.api_id).or_default().push(p);
    }
    Ok(apis
        .into_iter()
        .map(|a| {
            let params = by_api.remove(&a.id).unwrap_or_default();
            ApiView::new(a, params)
        })
        .collect())
}

/// Create an api and all of its parameters in one transaction.
#[instrument(skip(db, input), fields(user_id = input.user_id, api_name = %input.api_name))]
pub async fn create_api(db: &DatabaseConnection, input: CreateApiInput) -> Result<ApiView, ServiceError> {
    input.to_new_api().validate()?;
    for p in &input.parameters {
        parameter::validate_parameter(&p.parameter)?;
    }

    let txn = db.begin().await?;
    let created = api::create(&txn, input.to_new_api()).await?;
    let mut params = Vec::with_capacity(input.parameters.len());
    for p in &input.parameters {
        params.push(parameter::create(&txn, created.id, &p.parameter).await?);
    }
    txn.commit().await?;

    info!(api_id = created.id, parameters = params.len(), "api_created");
    Ok(ApiView::new(created, params))
}

/// Delete an api with its parameters and pane placements in one transaction.
#[instrument(skip(db))]
pub async fn delete_api(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    let txn = db.begin().await?;
    if api::Entity::find_by_id(id).one(&txn).await?.is_none() {
        return Err(ServiceError::not_found("api"));
    }
    let params = parameter::delete_for_api(&txn, id).await?;
    let panes = dashboard_pane::delete_for_api(&txn, id).await?;
    api::Entity::delete_by_id(id).exec(&txn).await?;
    txn.commit().await?;

    info!(api_id = id, parameters = params, panes, "api_deleted");
    Ok(())
}

/// Every api owned by `user_id`, each with its parameters.
pub async fn list_apis_by_user(db: &DatabaseConnection, user_id: i32) -> Result<Vec<ApiView>, ServiceError> {
    let apis = api::list_by_user(db, user_id).await?;
    load_with_parameters(db, apis).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::PaginatorTrait;
    use crate::dashboard_service;
    use crate::domain::{AddPaneInput, CreateDashboardInput, CreateUserInput, ParameterView};
    use crate::test_support::get_db;
    use crate::user_service;

    async fn seed_user(db: &DatabaseConnection, email: &str) -> Result<i32, ServiceError> {
        let u = user_service::create_user(db, CreateUserInput { name: "A".into(), email: email.into(), password: "p".into() }).await?;
        Ok(u.id)
    }

    fn input(user_id: i32, name: &str, params: &[&str]) -> CreateApiInput {
        CreateApiInput {
            user_id,
            api_name: name.into(),
            api_string: format!("https://api.example.com/{}", name.to_lowercase()),
            api_key: Some("k".into()),
            graph_type: "line".into(),
            pane_x: 10,
            pane_y: 20,
            parameters: params.iter().map(|p| ParameterView { parameter: p.to_string() }).collect(),
        }
    }

    fn sorted_params(v: &ApiView) -> Vec<String> {
        let mut out: Vec<String> = v.parameters.iter().map(|p| p.parameter.clone()).collect();
        out.sort();
        out
    }

    #[tokio::test]
    async fn create_then_list_returns_parameters() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let uid = seed_user(&db, "a@x.com").await?;

        let created = create_api(&db, input(uid, "Weather", &["city", "units", "lang"])).await?;
        assert_eq!(created.parameters.len(), 3);
        assert_eq!(created.pane_x, 10);

        let listed = list_apis_by_user(&db, uid).await?;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].api_id, created.api_id);
        assert_eq!(sorted_params(&listed[0]), vec!["city", "lang", "units"]);
        Ok(())
    }

    #[tokio::test]
    async fn list_keeps_parameters_with_their_api() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let uid = seed_user(&db, "a@x.com").await?;
        let other = seed_user(&db, "b@x.com").await?;

        create_api(&db, input(uid, "Weather", &["city"])).await?;
        create_api(&db, input(other, "Other", &["x"])).await?;
        create_api(&db, input(uid, "Stocks", &["ticker", "range"])).await?;
        create_api(&db, input(uid, "Empty", &[])).await?;

        let listed = list_apis_by_user(&db, uid).await?;
        let names: Vec<&str> = listed.iter().map(|a| a.api_name.as_str()).collect();
        assert_eq!(names, vec!["Weather", "Stocks", "Empty"]);
        assert_eq!(sorted_params(&listed[0]), vec!["city"]);
        assert_eq!(sorted_params(&listed[1]), vec!["range", "ticker"]);
        assert!(listed[2].parameters.is_empty());

        assert!(list_apis_by_user(&db, 999).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn failed_child_insert_leaves_nothing() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let uid = seed_user(&db, "a@x.com").await?;

        // second "city" violates the per-api parameter uniqueness
        let res = create_api(&db, input(uid, "Weather", &["city", "city", "units"])).await;
        assert!(matches!(res, Err(ServiceError::Db(_))));

        assert!(list_apis_by_user(&db, uid).await?.is_empty());
        assert_eq!(api::Entity::find().count(&db).await?, 0);
        assert_eq!(parameter::Entity::find().count(&db).await?, 0);
        Ok(())
    }

    #[tokio::test]
    async fn create_rejects_bad_input() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let uid = seed_user(&db, "a@x.com").await?;

        let mut bad = input(uid, "Weather", &[]);
        bad.graph_type = " ".into();
        assert!(matches!(create_api(&db, bad).await, Err(ServiceError::Validation(_))));

        assert!(matches!(create_api(&db, input(uid, "Weather", &["ok", ""])).await, Err(ServiceError::Validation(_))));

        // unknown owner fails on the foreign key
        assert!(matches!(create_api(&db, input(999, "Weather", &[])).await, Err(ServiceError::Db(_))));
        assert_eq!(api::Entity::find().count(&db).await?, 0);
        Ok(())
    }

    #[tokio::test]
    async fn delete_removes_children_and_panes() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let uid = seed_user(&db, "a@x.com").await?;
        let a = create_api(&db, input(uid, "Weather", &["city", "units"])).await?;
        let keep = create_api(&db, input(uid, "Stocks", &["ticker"])).await?;
        let d = dashboard_service::create_dashboard(&db, CreateDashboardInput { user_id: uid, name: "D".into() }).await?;
        dashboard_service::add_pane(&db, d.id, AddPaneInput { api_id: a.api_id }).await?;
        dashboard_service::add_pane(&db, d.id, AddPaneInput { api_id: keep.api_id }).await?;

        delete_api(&db, a.api_id).await?;

        assert_eq!(parameter::list_for_apis(&db, &[a.api_id]).await?.len(), 0);
        let detail = dashboard_service::get_dashboard(&db, d.id).await?;
        assert_eq!(detail.panes.len(), 1);
        assert_eq!(detail.panes[0].api_id, keep.api_id);
        assert!(detail.panes.iter().all(|p| p.api_id != a.api_id));

        let remaining = list_apis_by_user(&db, uid).await?;
        assert_eq!(remaining.len(), 1);
        assert_eq!(sorted_params(&remaining[0]), vec!["ticker"]);

        assert!(matches!(delete_api(&db, a.api_id).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn failed_delete_rolls_back_children() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let uid = seed_user(&db, "a@x.com").await?;
        let a = create_api(&db, input(uid, "Weather", &["city", "units"])).await?;
        let d = dashboard_service::create_dashboard(&db, CreateDashboardInput { user_id: uid, name: "D".into() }).await?;
        dashboard_service::add_pane(&db, d.id, AddPaneInput { api_id: a.api_id }).await?;

        // children go first, then the api row delete aborts
        db.execute_unprepared(
            "CREATE TRIGGER block_api_delete BEFORE DELETE ON apis BEGIN SELECT RAISE(ABORT, 'blocked'); END;",
        )
        .await?;

        let err = delete_api(&db, a.api_id).await.err().ok_or_else(|| anyhow::anyhow!("delete succeeded"))?;
        assert!(matches!(err, ServiceError::Db(_)), "got {err:?}");

        assert_eq!(parameter::list_for_apis(&db, &[a.api_id]).await?.len(), 2);
        assert_eq!(dashboard_pane::Entity::find().count(&db).await?, 1);
        let detail = dashboard_service::get_dashboard(&db, d.id).await?;
        assert_eq!(detail.panes.len(), 1);
        assert_eq!(detail.panes[0].api_id, a.api_id);
        assert_eq!(list_apis_by_user(&db, uid).await?.len(), 1);
        Ok(())
    }
}
