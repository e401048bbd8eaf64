//! JSON envelopes exchanged between the catalog API and its clients.
//!
//! Envelopes are generic over the item type: the API fills them with raw
//! documents, the storefront client decodes them into [`crate::Product`].

use serde::{Deserialize, Serialize};

/// Body of the read fallback.
pub const WELCOME_MESSAGE: &str = "Pineapple API";
/// Error message for a single-product lookup miss.
pub const PRODUCT_NOT_FOUND: &str = "Product not found";
/// Error message for unknown write paths.
pub const INVALID_ENDPOINT: &str = "Invalid endpoint";
/// Error message for store failures.
pub const INTERNAL_SERVER_ERROR: &str = "Internal server error";
/// Message returned by a successful seed.
pub const SEED_SUCCESS: &str = "Products seeded successfully";

/// `{ "products": [...] }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductsEnvelope<T> {
    pub products: Vec<T>,
}

/// `{ "product": {...} }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductEnvelope<T> {
    pub product: T,
}

/// Result of seeding the demo catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedEnvelope<T> {
    pub message: String,
    pub count: usize,
    pub products: Vec<T>,
}

/// `{ "message": "..." }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageBody {
    pub message: String,
}

/// Error body. `details` carries the underlying cause for server errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorBody {
    #[must_use]
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    #[must_use]
    pub fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}
