//! HTTP client for the catalog API.
//!
//! # Example
//!
//! ```rust,ignore
//! let client = CatalogClient::new("http://127.0.0.1:3000/api")?;
//! let phones = client.list_by_category("phone").await?;
//! ```

use std::sync::Arc;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use url::Url;

use pineapple_core::Product;
use pineapple_core::envelope::{ProductEnvelope, ProductsEnvelope, SeedEnvelope};

/// API base URL used when `PINEAPPLE_API_URL` is unset.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:3000/api";

/// Errors that can occur when talking to the catalog API.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed or the body could not be decoded.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Base URL could not be parsed.
    #[error("Invalid API URL: {0}")]
    Url(#[from] url::ParseError),

    /// Base URL cannot carry a path (e.g. `mailto:`).
    #[error("API URL cannot be a base: {0}")]
    NotABase(String),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// API answered with an unexpected status.
    #[error("API returned {status}: {body}")]
    Status { status: StatusCode, body: String },
}

/// Client for the catalog API.
///
/// Cheaply cloneable; the underlying connection pool is shared.
#[derive(Clone)]
pub struct CatalogClient {
    inner: Arc<CatalogClientInner>,
}

struct CatalogClientInner {
    client: reqwest::Client,
    base: Url,
}

impl CatalogClient {
    /// Create a client for the API rooted at `base_url` (e.g. `.../api`).
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Url` if the URL does not parse, or
    /// `ClientError::NotABase` if it cannot take path segments.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let base = Url::parse(base_url)?;
        if base.cannot_be_a_base() {
            return Err(ClientError::NotABase(base_url.to_string()));
        }

        Ok(Self {
            inner: Arc::new(CatalogClientInner {
                client: reqwest::Client::new(),
                base,
            }),
        })
    }

    /// The API base URL.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.inner.base
    }

    /// Build an endpoint URL below the base. Segments are percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.inner.base.clone();
        url.path_segments_mut()
            .map_err(|()| ClientError::NotABase(self.inner.base.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Catalog Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Every product in the catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API answers non-2xx.
    pub async fn list_products(&self) -> Result<Vec<Product>, ClientError> {
        let url = self.endpoint(&["products"])?;
        let envelope: ProductsEnvelope<Value> = self.get_json(url).await?;
        Ok(decode_products(envelope.products))
    }

    /// Products whose category equals `category` exactly.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API answers non-2xx.
    pub async fn list_by_category(&self, category: &str) -> Result<Vec<Product>, ClientError> {
        let url = self.endpoint(&["products", "category", category])?;
        let envelope: ProductsEnvelope<Value> = self.get_json(url).await?;
        Ok(decode_products(envelope.products))
    }

    /// One product by ID.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::NotFound` when the API answers 404, or another
    /// error if the request fails.
    pub async fn get_product(&self, id: &str) -> Result<Product, ClientError> {
        let url = self.endpoint(&["products", id])?;
        let response = self.inner.client.get(url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound(id.to_string()));
        }

        let envelope: ProductEnvelope<Product> = decode(response).await?;
        Ok(envelope.product)
    }

    /// Append the demo catalog on the server.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API answers non-2xx.
    pub async fn seed(&self) -> Result<SeedEnvelope<Product>, ClientError> {
        let url = self.endpoint(&["products", "seed"])?;
        let response = self.inner.client.post(url).send().await?;
        decode(response).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ClientError> {
        tracing::debug!(%url, "GET");
        let response = self.inner.client.get(url).send().await?;
        decode(response).await
    }
}

/// Decode listed documents one at a time. Documents are free-form, so one
/// that does not fit [`Product`] is logged and skipped rather than failing
/// the whole listing.
fn decode_products(items: Vec<Value>) -> Vec<Product> {
    items
        .into_iter()
        .filter_map(|item| {
            let id = item.get("id").cloned().unwrap_or(Value::Null);
            serde_json::from_value(item)
                .inspect_err(|e| tracing::warn!(%id, error = %e, "Skipping unreadable product"))
                .ok()
        })
        .collect()
}

/// Decode a 2xx JSON body, or turn the response into `ClientError::Status`.
async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ClientError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ClientError::Status { status, body });
    }
    Ok(response.json().await?)
}
