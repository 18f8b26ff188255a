use anyhow::Result;
use sea_orm::{EntityTrait, PaginatorTrait, TransactionTrait};

use super::{new_api, seed_user, setup_test_db};
use crate::{api, dashboard, dashboard_pane, parameter, user};

/// Test basic transaction commit
#[tokio::test]
async fn test_transaction_commit() -> Result<()> {
    let db = setup_test_db().await?;
    let u = seed_user(&db, "commit@example.com").await?;

    let txn = db.begin().await?;
    let a = api::create(&txn, new_api(u.id, "Weather")).await?;
    parameter::create(&txn, a.id, "city").await?;
    txn.commit().await?;

    assert!(api::Entity::find_by_id(a.id).one(&db).await?.is_some());
    assert_eq!(parameter::list_for_apis(&db, &[a.id]).await?.len(), 1);
    Ok(())
}

/// Test transaction rollback
#[tokio::test]
async fn test_transaction_rollback() -> Result<()> {
    let db = setup_test_db().await?;
    let u = seed_user(&db, "rollback@example.com").await?;

    let txn = db.begin().await?;
    let a = api::create(&txn, new_api(u.id, "Weather")).await?;
    parameter::create(&txn, a.id, "city").await?;
    txn.rollback().await?;

    assert!(api::Entity::find_by_id(a.id).one(&db).await?.is_none());
    assert_eq!(parameter::Entity::find().count(&db).await?, 0);
    Ok(())
}

/// A failing statement inside the transaction leaves nothing behind once the
/// transaction is dropped without commit.
#[tokio::test]
async fn test_transaction_error_handling() -> Result<()> {
    let db = setup_test_db().await?;
    let u = seed_user(&db, "txerr@example.com").await?;

    let result = async {
        let txn = db.begin().await?;
        let a = api::create(&txn, new_api(u.id, "Weather")).await?;
        parameter::create(&txn, a.id, "city").await?;
        // unique (api_id, parameter) violation
        parameter::create(&txn, a.id, "city").await?;
        txn.commit().await?;
        Ok::<(), anyhow::Error>(())
    }
    .await;

    assert!(result.is_err());
    assert_eq!(api::Entity::find().count(&db).await?, 0);
    assert_eq!(parameter::Entity::find().count(&db).await?, 0);
    Ok(())
}

/// Deleting a user removes everything it owns through the cascading keys
#[tokio::test]
async fn test_user_delete_cascades() -> Result<()> {
    let db = setup_test_db().await?;
    let u = seed_user(&db, "cascade@example.com").await?;
    let other = seed_user(&db, "survivor@example.com").await?;

    let a = api::create(&db, new_api(u.id, "Weather")).await?;
    parameter::create(&db, a.id, "city").await?;
    let d = dashboard::create(&db, u.id, "Mine").await?;
    dashboard_pane::attach(&db, d.id, a.id).await?;

    let kept = api::create(&db, new_api(other.id, "Kept")).await?;

    assert!(user::hard_delete(&db, u.id).await?);

    assert!(api::list_by_user(&db, u.id).await?.is_empty());
    assert!(dashboard::list_by_user(&db, u.id).await?.is_empty());
    assert!(parameter::list_for_apis(&db, &[a.id]).await?.is_empty());
    assert_eq!(dashboard_pane::Entity::find().count(&db).await?, 0);
    assert!(api::Entity::find_by_id(kept.id).one(&db).await?.is_some());
    Ok(())
}

/// Deleting an api removes its pane rows but not the dashboard
#[tokio::test]
async fn test_api_delete_cascades_to_panes() -> Result<()> {
    let db = setup_test_db().await?;
    let u = seed_user(&db, "panes@example.com").await?;
    let a = api::create(&db, new_api(u.id, "Weather")).await?;
    let d = dashboard::create(&db, u.id, "Main").await?;
    dashboard_pane::attach(&db, d.id, a.id).await?;

    api::Entity::delete_by_id(a.id).exec(&db).await?;

    assert_eq!(dashboard_pane::Entity::find().count(&db).await?, 0);
    assert!(dashboard::Entity::find_by_id(d.id).one(&db).await?.is_some());
    Ok(())
}
