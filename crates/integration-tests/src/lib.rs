//! Integration tests for the Pineapple catalog.
//!
//! # Running Tests
//!
//! ```bash
//! # In-process tests (memory store, no external services)
//! cargo test -p pineapple-integration-tests
//!
//! # Tests against a running API server
//! cargo run -p pineapple-api &
//! cargo test -p pineapple-integration-tests -- --ignored
//! ```
//!
//! # Test Categories
//!
//! - `storefront_client` - `CatalogClient` and local cart against an
//!   in-process server
//! - `catalog_api` - raw HTTP contract against `PINEAPPLE_API_URL`

use std::net::SocketAddr;
use std::sync::Arc;

use pineapple_api::config::ApiConfig;
use pineapple_api::state::AppState;
use pineapple_api::store::MemoryStore;

/// Base URL of the API under test for the ignored live-server tests.
#[must_use]
pub fn api_base_url() -> String {
    std::env::var("PINEAPPLE_API_URL")
        .unwrap_or_else(|_| pineapple_cli::DEFAULT_API_URL.to_string())
}

/// Serve the catalog API on an ephemeral port, backed by a fresh memory
/// store. Returns the `/api` base URL.
///
/// # Errors
///
/// Returns an error if the configuration cannot be built or the port cannot
/// be bound.
pub async fn spawn_memory_api() -> Result<String, Box<dyn std::error::Error>> {
    let config = ApiConfig::from_lookup(|_| None)?;
    let state = AppState::new(config, Arc::new(MemoryStore::new()));

    let listener = tokio::net::TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        let _ = axum::serve(listener, pineapple_api::app(state)).await;
    });

    Ok(format!("http://{addr}/api"))
}
