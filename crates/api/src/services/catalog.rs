//! Catalog operations over the `products` collection.
//!
//! Each function takes the store explicitly and returns the response
//! envelope; HTTP concerns stay in `routes`.

use serde_json::{Value, json};
use tracing::{info, instrument};

use pineapple_core::envelope::{ProductEnvelope, ProductsEnvelope, SEED_SUCCESS, SeedEnvelope};
use pineapple_core::{DocumentId, PRODUCTS_COLLECTION};

use super::demo_catalog::demo_products;
use crate::error::{AppError, Result};
use crate::store::{Document, DocumentStore};

/// Every product, in store order.
///
/// # Errors
///
/// Returns `AppError::Store` if the store query fails.
#[instrument(skip(store), fields(backend = store.backend()))]
pub async fn list_all(store: &dyn DocumentStore) -> Result<ProductsEnvelope<Document>> {
    let products = store.list(PRODUCTS_COLLECTION).await?;
    Ok(ProductsEnvelope { products })
}

/// Products whose `category` equals `category` exactly.
///
/// # Errors
///
/// Returns `AppError::Store` if the store query fails.
#[instrument(skip(store), fields(backend = store.backend()))]
pub async fn list_by_category(
    store: &dyn DocumentStore,
    category: &str,
) -> Result<ProductsEnvelope<Document>> {
    let products = store
        .find_where(PRODUCTS_COLLECTION, "category", &json!(category))
        .await?;
    Ok(ProductsEnvelope { products })
}

/// A single product by ID.
///
/// # Errors
///
/// Returns `AppError::ProductNotFound` if no product has this ID, or
/// `AppError::Store` if the lookup fails.
#[instrument(skip(store), fields(backend = store.backend()))]
pub async fn get_product(store: &dyn DocumentStore, id: &str) -> Result<ProductEnvelope<Document>> {
    let id = DocumentId::new(id);

    // Stores never assign an empty ID.
    if id.as_str().is_empty() {
        return Err(AppError::ProductNotFound(id));
    }

    store
        .get(PRODUCTS_COLLECTION, &id)
        .await?
        .map(|product| ProductEnvelope { product })
        .ok_or(AppError::ProductNotFound(id))
}

/// Append the demo catalog, one insert at a time, in catalog order.
///
/// Not idempotent: each call adds another full set. A failed insert leaves
/// the earlier ones in place.
///
/// # Errors
///
/// Returns `AppError::Store` on the first failed insert.
#[instrument(skip(store), fields(backend = store.backend()))]
pub async fn seed(store: &dyn DocumentStore) -> Result<SeedEnvelope<Document>> {
    let catalog = demo_products();
    let mut inserted = Vec::with_capacity(catalog.len());

    for details in catalog {
        let fields = match serde_json::to_value(&details) {
            Ok(Value::Object(fields)) => fields,
            Ok(other) => {
                return Err(AppError::Internal(format!(
                    "product did not serialize to an object: {other}"
                )));
            }
            Err(e) => return Err(AppError::Internal(e.to_string())),
        };

        let id = store.insert(PRODUCTS_COLLECTION, fields.clone()).await?;
        inserted.push(Document::new(id, fields));
    }

    info!(count = inserted.len(), "Seeded demo catalog");

    Ok(SeedEnvelope {
        message: SEED_SUCCESS.to_string(),
        count: inserted.len(),
        products: inserted,
    })
}
