// PostgreSQL storage tests
// Run with: DATABASE_URL=postgres://... cargo test -p hookwatch-control-plane --test postgres_test -- --ignored
// Clears the webhooks table; point it at a scratch database.

use hookwatch_control_plane::storage::{CreateWebhookRow, StorageBackend};
use std::collections::HashMap;
use uuid::Uuid;

fn row(pathname: &str, body: Option<&str>) -> CreateWebhookRow {
    CreateWebhookRow {
        method: "POST".to_string(),
        pathname: pathname.to_string(),
        ip: "127.0.0.1".to_string(),
        status_code: 200,
        content_type: Some("application/json".to_string()),
        content_length: body.map(|b| b.len() as i32),
        headers: HashMap::from([("x-multi".to_string(), "a, b".to_string())]),
        body: body.map(str::to_string),
        query_params: HashMap::from([("source".to_string(), "test".to_string())]),
    }
}

#[tokio::test]
#[ignore = "requires DATABASE_URL pointing at a PostgreSQL instance"]
async fn test_postgres_webhook_lifecycle() {
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let db = StorageBackend::postgres(&database_url).await.unwrap();
    db.migrate().await.unwrap();
    assert_eq!(db.kind(), "postgres");
    db.clear_webhooks().await.unwrap();

    let first = db.create_webhook(row("/a", Some(r#"{"n":1}"#))).await.unwrap();
    let second = db.create_webhook(row("/b", None)).await.unwrap();
    let third = db.create_webhook(row("/c", Some(r#"{"n":3}"#))).await.unwrap();
    assert_eq!(first.id.get_version_num(), 7);

    // Round trip of the JSON columns
    let fetched = db.get_webhook(first.id).await.unwrap().unwrap();
    assert_eq!(fetched.headers.0["x-multi"], "a, b");
    assert_eq!(fetched.query_params.0["source"], "test");
    assert_eq!(fetched.content_length, Some(7));
    assert!(db.get_webhook(Uuid::now_v7()).await.unwrap().is_none());

    // Newest first, keyset continuation
    let page = db.list_webhooks(None, 2).await.unwrap();
    let ids: Vec<Uuid> = page.iter().map(|w| w.id).collect();
    assert_eq!(ids, vec![third.id, second.id]);

    let rest = db.list_webhooks(Some(second.id), 2).await.unwrap();
    let ids: Vec<Uuid> = rest.iter().map(|w| w.id).collect();
    assert_eq!(ids, vec![first.id]);

    let bodies = db
        .list_webhook_bodies(&[first.id, second.id, third.id])
        .await
        .unwrap();
    assert_eq!(
        bodies,
        vec![
            Some(r#"{"n":3}"#.to_string()),
            None,
            Some(r#"{"n":1}"#.to_string())
        ]
    );

    assert_eq!(db.delete_webhook(second.id).await.unwrap(), vec![second.id]);
    assert!(db.delete_webhook(second.id).await.unwrap().is_empty());

    assert_eq!(db.clear_webhooks().await.unwrap(), 2);
    assert!(db.list_webhooks(None, 20).await.unwrap().is_empty());
}
