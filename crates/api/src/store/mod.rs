//! Document store abstraction.
//!
//! The catalog talks to its database through [`DocumentStore`]: named
//! collections of schema-free JSON documents with store-assigned IDs,
//! readable in full, by ID, or by a single field-equality filter.
//!
//! # Backends
//!
//! - [`MemoryStore`] - process-local, used when no database is configured
//! - [`PostgresStore`] - `catalog.documents` table with a JSONB payload
//!
//! # Migrations
//!
//! Migrations are stored in `crates/api/migrations/` and run via:
//! ```bash
//! cargo run -p pineapple-cli -- migrate
//! ```

pub mod memory;
pub mod postgres;
#[cfg(test)]
pub(crate) mod testing;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use pineapple_core::DocumentId;

pub use memory::MemoryStore;
pub use postgres::{PostgresStore, create_pool};

/// Errors surfaced by a document store backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A stored document could not be decoded.
    #[error("decode error: {0}")]
    Decode(String),

    /// The backend cannot be reached.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// A stored document: its ID plus free-form fields.
///
/// Serializes flat, as `{ "id": ..., ...fields }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocumentId,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Document {
    /// Pair fields with an ID. Any `id` key inside `fields` is dropped so the
    /// store-assigned identifier is the only one a reader sees.
    #[must_use]
    pub fn new(id: DocumentId, mut fields: Map<String, Value>) -> Self {
        fields.remove("id");
        Self { id, fields }
    }

    /// Whether `field` is present and equal to `value`.
    #[must_use]
    pub fn field_equals(&self, field: &str, value: &Value) -> bool {
        self.fields.get(field) == Some(value)
    }
}

/// Collection-scoped document storage.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// All documents in a collection, in the store's default order.
    async fn list(&self, collection: &str) -> Result<Vec<Document>, StoreError>;

    /// Documents whose `field` equals `value` exactly.
    async fn find_where(
        &self,
        collection: &str,
        field: &str,
        value: &Value,
    ) -> Result<Vec<Document>, StoreError>;

    /// A single document by ID.
    async fn get(&self, collection: &str, id: &DocumentId)
    -> Result<Option<Document>, StoreError>;

    /// Insert a new document, returning its store-assigned ID.
    async fn insert(
        &self,
        collection: &str,
        fields: Map<String, Value>,
    ) -> Result<DocumentId, StoreError>;

    /// Check that the backend is reachable.
    async fn ping(&self) -> Result<(), StoreError>;

    /// Short backend name for logs.
    fn backend(&self) -> &'static str;
}
