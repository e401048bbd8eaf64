//! HTTP route handlers for the catalog API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                       - Liveness
//! GET  /health/ready                 - Store reachability
//!
//! # Catalog (resolved by the route table, first match wins)
//! GET  /api | /api/products          - List all products
//! GET  /api/products/category/{c}    - List products in category c
//! GET  /api/products/{id}            - One product
//! GET  /api/{anything else}          - Welcome message
//! POST /api/products/seed            - Append the demo catalog
//! POST /api/{anything else}          - 404 Invalid endpoint
//! ```

pub mod catalog;
pub mod health;
pub mod table;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Create the `/api` routes.
///
/// The catch-all does not match an empty remainder, so `/api` and `/api/`
/// are registered explicitly.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/api", get(catalog::read_root).post(catalog::write_root))
        .route("/api/", get(catalog::read_root).post(catalog::write_root))
        .route(
            "/api/{*path}",
            get(catalog::read_path).post(catalog::write_path),
        )
}

/// Create all routes for the API.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::readiness))
        .merge(api_routes())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{Body, to_bytes},
        http::{Method, Request, StatusCode},
    };
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use crate::config::ApiConfig;
    use crate::store::testing::UnavailableStore;
    use crate::store::{DocumentStore, MemoryStore};
    use crate::{app, state::AppState};

    fn state_with(store: Arc<dyn DocumentStore>) -> AppState {
        AppState::new(ApiConfig::from_lookup(|_| None).unwrap(), store)
    }

    async fn call(state: &AppState, method: Method, uri: &str) -> (StatusCode, Value) {
        let response = app(state.clone())
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    async fn get(state: &AppState, uri: &str) -> (StatusCode, Value) {
        call(state, Method::GET, uri).await
    }

    async fn post(state: &AppState, uri: &str) -> (StatusCode, Value) {
        call(state, Method::POST, uri).await
    }

    fn memory() -> AppState {
        state_with(Arc::new(MemoryStore::new()))
    }

    #[tokio::test]
    async fn test_empty_catalog_lists_empty_array() {
        let state = memory();
        for uri in ["/api", "/api/", "/api/products"] {
            let (status, body) = get(&state, uri).await;
            assert_eq!(status, StatusCode::OK, "{uri}");
            assert_eq!(body, json!({ "products": [] }), "{uri}");
        }
    }

    #[tokio::test]
    async fn test_seed_then_list() {
        let state = memory();
        let (status, body) = post(&state, "/api/products/seed").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Products seeded successfully");
        assert_eq!(body["count"], 8);
        assert_eq!(body["products"].as_array().unwrap().len(), 8);

        let (_, listed) = get(&state, "/api/products").await;
        assert_eq!(listed["products"].as_array().unwrap().len(), 8);
    }

    #[tokio::test]
    async fn test_seed_twice_adds_sixteen_unique() {
        let state = memory();
        post(&state, "/api/products/seed").await;
        post(&state, "/api/products/seed").await;

        let (_, listed) = get(&state, "/api/products").await;
        let products = listed["products"].as_array().unwrap();
        assert_eq!(products.len(), 16);

        let mut ids: Vec<_> = products.iter().map(|p| p["id"].clone()).collect();
        ids.sort_by_key(ToString::to_string);
        ids.dedup();
        assert_eq!(ids.len(), 16);
    }

    #[tokio::test]
    async fn test_every_listed_product_can_be_fetched() {
        let state = memory();
        post(&state, "/api/products/seed").await;
        let (_, listed) = get(&state, "/api/products").await;

        for product in listed["products"].as_array().unwrap() {
            let id = product["id"].as_str().unwrap();
            let (status, body) = get(&state, &format!("/api/products/{id}")).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(&body["product"], product);
        }
    }

    #[tokio::test]
    async fn test_category_filter() {
        let state = memory();
        post(&state, "/api/products/seed").await;

        let (status, body) = get(&state, "/api/products/category/laptop").await;
        assert_eq!(status, StatusCode::OK);
        let laptops = body["products"].as_array().unwrap();
        assert_eq!(laptops.len(), 2);
        assert!(laptops.iter().all(|p| p["category"] == "laptop"));
    }

    #[tokio::test]
    async fn test_unknown_category_is_empty_not_404() {
        let state = memory();
        post(&state, "/api/products/seed").await;

        let (status, body) = get(&state, "/api/products/category/drone").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "products": [] }));
    }

    #[tokio::test]
    async fn test_missing_product_is_404() {
        let state = memory();
        let (status, body) = get(&state, "/api/products/notarealid123").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "Product not found" }));
    }

    #[tokio::test]
    async fn test_unknown_read_path_is_welcome() {
        let state = memory();
        let (status, body) = get(&state, "/api/orders").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "message": "Pineapple API" }));
    }

    #[tokio::test]
    async fn test_unknown_write_path_is_invalid_endpoint() {
        let state = memory();
        for uri in ["/api", "/api/products", "/api/products/abc", "/api/seed"] {
            let (status, body) = post(&state, uri).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
            assert_eq!(body, json!({ "error": "Invalid endpoint" }), "{uri}");
        }
    }

    #[tokio::test]
    async fn test_unreachable_store_is_500_everywhere() {
        let state = state_with(Arc::new(UnavailableStore));
        let reads = [
            "/api",
            "/api/products",
            "/api/products/category/phone",
            "/api/products/abc",
        ];
        for uri in reads {
            let (status, body) = get(&state, uri).await;
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{uri}");
            assert_eq!(body["error"], "Internal server error", "{uri}");
            assert!(body["details"].is_string(), "{uri}");
        }

        let (status, body) = post(&state, "/api/products/seed").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Internal server error");
    }

    #[tokio::test]
    async fn test_health() {
        let (status, _) = get(&memory(), "/health").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_readiness_reflects_store() {
        let (status, _) = get(&memory(), "/health/ready").await;
        assert_eq!(status, StatusCode::OK);

        let unavailable = state_with(Arc::new(UnavailableStore));
        let (status, _) = get(&unavailable, "/health/ready").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    }
}
