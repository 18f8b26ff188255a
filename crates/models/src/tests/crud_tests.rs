use anyhow::Result;
use sea_orm::{EntityTrait, ModelTrait};

use super::{new_api, seed_user, setup_test_db};
use crate::errors::ModelError;
use crate::{api, dashboard, dashboard_pane, parameter, user};

/// Test user CRUD operations
#[tokio::test]
async fn test_user_crud() -> Result<()> {
    let db = setup_test_db().await?;

    let created = user::create(&db, "  Alice ", "alice@example.com", "hash").await?;
    assert!(created.id > 0);
    assert_eq!(created.name, "Alice");

    let found = user::find_by_email(&db, "alice@example.com").await?.expect("by email");
    assert_eq!(found.id, created.id);

    let updated = user::update_profile(&db, created.id, "Alice B", "alice.b@example.com").await?.expect("updated");
    assert_eq!(updated.name, "Alice B");
    assert_eq!(updated.email, "alice.b@example.com");
    assert_eq!(updated.password_hash, "hash");

    assert!(user::update_profile(&db, created.id + 100, "X", "x@example.com").await?.is_none());

    assert!(user::hard_delete(&db, created.id).await?);
    assert!(!user::hard_delete(&db, created.id).await?);
    assert!(user::Entity::find_by_id(created.id).one(&db).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_user_validation() -> Result<()> {
    let db = setup_test_db().await?;
    assert!(matches!(user::create(&db, " ", "a@example.com", "h").await, Err(ModelError::Validation(_))));
    assert!(matches!(user::create(&db, "A", "not-an-email", "h").await, Err(ModelError::Validation(_))));
    assert!(matches!(user::create(&db, "A", "a@example.com", "").await, Err(ModelError::Validation(_))));
    Ok(())
}

#[tokio::test]
async fn test_user_email_unique() -> Result<()> {
    let db = setup_test_db().await?;
    seed_user(&db, "dup@example.com").await?;
    let second = user::create(&db, "Other", "dup@example.com", "hash").await;
    assert!(matches!(second, Err(ModelError::Db(_))));
    Ok(())
}

/// Test api and parameter CRUD operations
#[tokio::test]
async fn test_api_and_parameters() -> Result<()> {
    let db = setup_test_db().await?;
    let u = seed_user(&db, "apis@example.com").await?;

    let a = api::create(&db, new_api(u.id, "Weather")).await?;
    assert_eq!(a.user_id, u.id);
    assert_eq!(a.graph_type, "line");

    parameter::create(&db, a.id, "city").await?;
    parameter::create(&db, a.id, "units").await?;
    let b = api::create(&db, new_api(u.id, "Stocks")).await?;
    parameter::create(&db, b.id, "ticker").await?;

    let listed = api::list_by_user(&db, u.id).await?;
    assert_eq!(listed.iter().map(|x| x.id).collect::<Vec<_>>(), vec![a.id, b.id]);

    let params = parameter::list_for_apis(&db, &[a.id, b.id]).await?;
    assert_eq!(params.len(), 3);
    assert!(parameter::list_for_apis(&db, &[]).await?.is_empty());

    let via_relation = a.find_related(parameter::Entity).all(&db).await?;
    assert_eq!(via_relation.len(), 2);

    assert_eq!(parameter::delete_for_api(&db, a.id).await?, 2);
    assert!(parameter::list_for_apis(&db, &[a.id]).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_api_validation() -> Result<()> {
    let db = setup_test_db().await?;
    let u = seed_user(&db, "v@example.com").await?;

    let mut input = new_api(u.id, "X");
    input.api_string = "   ".into();
    assert!(matches!(api::create(&db, input).await, Err(ModelError::Validation(_))));

    let mut input = new_api(u.id, "X");
    input.graph_type = "g".repeat(65);
    assert!(matches!(api::create(&db, input).await, Err(ModelError::Validation(_))));

    let a = api::create(&db, new_api(u.id, "Ok")).await?;
    assert!(matches!(parameter::create(&db, a.id, "").await, Err(ModelError::Validation(_))));
    Ok(())
}

#[tokio::test]
async fn test_api_requires_existing_user() -> Result<()> {
    let db = setup_test_db().await?;
    let res = api::create(&db, new_api(4242, "Orphan")).await;
    assert!(matches!(res, Err(ModelError::Db(_))));
    Ok(())
}

#[tokio::test]
async fn test_duplicate_parameter_rejected() -> Result<()> {
    let db = setup_test_db().await?;
    let u = seed_user(&db, "p@example.com").await?;
    let a = api::create(&db, new_api(u.id, "Weather")).await?;
    parameter::create(&db, a.id, "city").await?;
    assert!(matches!(parameter::create(&db, a.id, "city").await, Err(ModelError::Db(_))));
    Ok(())
}

/// Test dashboard and pane association operations
#[tokio::test]
async fn test_dashboard_and_panes() -> Result<()> {
    let db = setup_test_db().await?;
    let u = seed_user(&db, "dash@example.com").await?;
    let a = api::create(&db, new_api(u.id, "Weather")).await?;

    let d = dashboard::create(&db, u.id, "Dashboard #1").await?;
    assert_eq!(dashboard::list_by_user(&db, u.id).await?.len(), 1);

    let renamed = dashboard::rename(&db, d.id, "Main").await?.expect("renamed");
    assert_eq!(renamed.name, "Main");
    assert!(dashboard::rename(&db, d.id + 10, "Nope").await?.is_none());
    assert!(matches!(dashboard::rename(&db, d.id, "").await, Err(ModelError::Validation(_))));

    assert!(dashboard_pane::attach(&db, d.id, a.id).await?);
    // second attach is a no-op
    assert!(!dashboard_pane::attach(&db, d.id, a.id).await?);

    let apis_on_dashboard = d.find_related(api::Entity).all(&db).await?;
    assert_eq!(apis_on_dashboard.len(), 1);
    assert_eq!(apis_on_dashboard[0].id, a.id);

    let dashboards_with_api = a.find_related(dashboard::Entity).all(&db).await?;
    assert_eq!(dashboards_with_api.len(), 1);

    assert!(dashboard_pane::detach(&db, d.id, a.id).await?);
    assert!(!dashboard_pane::detach(&db, d.id, a.id).await?);
    assert!(d.find_related(api::Entity).all(&db).await?.is_empty());

    assert!(dashboard::hard_delete(&db, d.id).await?);
    assert!(dashboard::list_by_user(&db, u.id).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_attach_dangling_ids_fails() -> Result<()> {
    let db = setup_test_db().await?;
    let u = seed_user(&db, "dangle@example.com").await?;
    let d = dashboard::create(&db, u.id, "D").await?;
    assert!(matches!(dashboard_pane::attach(&db, d.id, 999).await, Err(ModelError::Db(_))));
    Ok(())
}
