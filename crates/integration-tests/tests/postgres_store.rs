//! `PostgresStore` contract tests.
//!
//! These tests require:
//! - A running `PostgreSQL` database
//! - `API_DATABASE_URL` (or `DATABASE_URL`) pointing at it
//!
//! Migrations are applied on connect. Each test writes to its own
//! collection so tests can share a database and run in parallel.
//!
//! Run with: cargo test -p pineapple-integration-tests -- --ignored

use std::collections::HashSet;

use secrecy::SecretString;
use serde_json::{Map, Value, json};

use pineapple_api::services::catalog;
use pineapple_api::store::{DocumentStore, PostgresStore, create_pool};
use pineapple_core::{DocumentId, PRODUCTS_COLLECTION};

async fn connect() -> PostgresStore {
    let database_url = std::env::var("API_DATABASE_URL")
        .ok()
        .filter(|url| !url.trim().is_empty())
        .or_else(|| std::env::var("DATABASE_URL").ok())
        .map(SecretString::from)
        .expect("API_DATABASE_URL or DATABASE_URL must be set");

    let pool = create_pool(&database_url)
        .await
        .expect("Failed to connect to database");
    sqlx::migrate!("../api/migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    PostgresStore::new(pool)
}

/// A collection name no other test run uses.
fn fresh_collection(label: &str) -> String {
    format!("test_{label}_{}", DocumentId::generate())
}

fn fields(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected an object, got {other}"),
    }
}

#[tokio::test]
#[ignore = "Requires running database"]
async fn test_empty_collection_lists_nothing() {
    let store = connect().await;
    let docs = store
        .list(&fresh_collection("empty"))
        .await
        .expect("list failed");
    assert!(docs.is_empty());
}

#[tokio::test]
#[ignore = "Requires running database"]
async fn test_list_keeps_insertion_order() {
    let store = connect().await;
    let collection = fresh_collection("order");

    let mut inserted = Vec::new();
    for name in ["first", "second", "third", "fourth"] {
        let id = store
            .insert(&collection, fields(json!({ "name": name })))
            .await
            .expect("insert failed");
        inserted.push(id);
    }

    let listed: Vec<_> = store
        .list(&collection)
        .await
        .expect("list failed")
        .into_iter()
        .map(|doc| doc.id)
        .collect();
    assert_eq!(listed, inserted);
}

#[tokio::test]
#[ignore = "Requires running database"]
async fn test_find_where_is_exact_and_case_sensitive() {
    let store = connect().await;
    let collection = fresh_collection("filter");

    for (name, category) in [("a", "phone"), ("b", "Phone"), ("c", "laptop"), ("d", "phone")] {
        store
            .insert(&collection, fields(json!({ "name": name, "category": category })))
            .await
            .expect("insert failed");
    }
    store
        .insert(&collection, fields(json!({ "name": "e" })))
        .await
        .expect("insert failed");

    let phones = store
        .find_where(&collection, "category", &json!("phone"))
        .await
        .expect("find failed");
    let names: Vec<_> = phones.iter().map(|d| d.fields["name"].clone()).collect();
    assert_eq!(names, [json!("a"), json!("d")]);

    let none = store
        .find_where(&collection, "category", &json!("drone"))
        .await
        .expect("find failed");
    assert!(none.is_empty());

    let blank = store
        .find_where(&collection, "category", &json!(""))
        .await
        .expect("find failed");
    assert!(blank.is_empty());
}

#[tokio::test]
#[ignore = "Requires running database"]
async fn test_get_round_trips_and_missing_is_none() {
    let store = connect().await;
    let collection = fresh_collection("get");

    let id = store
        .insert(
            &collection,
            fields(json!({ "id": "spoofed", "name": "PinePad", "price": 449 })),
        )
        .await
        .expect("insert failed");

    let doc = store
        .get(&collection, &id)
        .await
        .expect("get failed")
        .expect("document missing");
    assert_eq!(doc.id, id);
    assert_eq!(doc.fields.get("price"), Some(&json!(449)));
    assert!(!doc.fields.contains_key("id"));

    let missing = store
        .get(&collection, &DocumentId::new("does-not-exist"))
        .await
        .expect("get failed");
    assert!(missing.is_none());
}

#[tokio::test]
#[ignore = "Requires running database"]
async fn test_seed_twice_adds_sixteen_unique_products() {
    let store = connect().await;
    let before = store
        .list(PRODUCTS_COLLECTION)
        .await
        .expect("list failed")
        .len();

    let first = catalog::seed(&store).await.expect("first seed failed");
    let second = catalog::seed(&store).await.expect("second seed failed");

    let ids: HashSet<_> = first
        .products
        .iter()
        .chain(&second.products)
        .map(|doc| doc.id.clone())
        .collect();
    assert_eq!(ids.len(), 16);

    let after = store.list(PRODUCTS_COLLECTION).await.expect("list failed");
    assert_eq!(after.len(), before + 16);
    assert!(ids.iter().all(|id| after.iter().any(|doc| &doc.id == id)));
}

#[tokio::test]
#[ignore = "Requires running database"]
async fn test_ping() {
    let store = connect().await;
    store.ping().await.expect("ping failed");
    assert_eq!(store.backend(), "postgres");
}
