//! `PostgreSQL` document store.
//!
//! # Table: `catalog.documents`
//!
//! - `collection`, `id` - composite primary key
//! - `data` - JSONB object with the document fields
//! - `seq` - insertion order, used as the default list order
//!
//! Queries are built at runtime (no compile-time checked macros) so the crate
//! builds without a live database.

use std::time::Duration;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde_json::{Map, Value};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use sqlx::types::Json;

use pineapple_core::DocumentId;

use super::{Document, DocumentStore, StoreError};

/// Attempts at finding a free generated ID before giving up.
const MAX_ID_ATTEMPTS: usize = 3;

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Arguments
///
/// * `database_url` - `PostgreSQL` connection string (wrapped in `SecretString`)
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}

/// Document store backed by the `catalog.documents` table.
#[derive(Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Turn a `(id, data)` row into a [`Document`].
fn decode_row((id, Json(data)): (String, Json<Value>)) -> Result<Document, StoreError> {
    match data {
        Value::Object(fields) => Ok(Document::new(DocumentId::new(id), fields)),
        other => Err(StoreError::Decode(format!(
            "document {id} is not an object (got {other})"
        ))),
    }
}

#[async_trait]
impl DocumentStore for PostgresStore {
    async fn list(&self, collection: &str) -> Result<Vec<Document>, StoreError> {
        let rows: Vec<(String, Json<Value>)> = sqlx::query_as(
            r"
            SELECT id, data
            FROM catalog.documents
            WHERE collection = $1
            ORDER BY seq
            ",
        )
        .bind(collection)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(decode_row).collect()
    }

    async fn find_where(
        &self,
        collection: &str,
        field: &str,
        value: &Value,
    ) -> Result<Vec<Document>, StoreError> {
        let rows: Vec<(String, Json<Value>)> = sqlx::query_as(
            r"
            SELECT id, data
            FROM catalog.documents
            WHERE collection = $1 AND data -> $2::text = $3::jsonb
            ORDER BY seq
            ",
        )
        .bind(collection)
        .bind(field)
        .bind(Json(value))
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(decode_row).collect()
    }

    async fn get(
        &self,
        collection: &str,
        id: &DocumentId,
    ) -> Result<Option<Document>, StoreError> {
        let row: Option<(String, Json<Value>)> = sqlx::query_as(
            r"
            SELECT id, data
            FROM catalog.documents
            WHERE collection = $1 AND id = $2
            ",
        )
        .bind(collection)
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(decode_row).transpose()
    }

    async fn insert(
        &self,
        collection: &str,
        mut fields: Map<String, Value>,
    ) -> Result<DocumentId, StoreError> {
        fields.remove("id");
        let data = Value::Object(fields);

        let mut last_conflict = None;
        for _ in 0..MAX_ID_ATTEMPTS {
            let id = DocumentId::generate();
            let result = sqlx::query(
                r"
                INSERT INTO catalog.documents (collection, id, data)
                VALUES ($1, $2, $3)
                ",
            )
            .bind(collection)
            .bind(id.as_str())
            .bind(Json(&data))
            .execute(&self.pool)
            .await;

            match result {
                Ok(_) => return Ok(id),
                Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                    tracing::warn!(collection, id = %id, "generated document id collided");
                    last_conflict = Some(sqlx::Error::Database(db_err));
                }
                Err(e) => return Err(StoreError::Database(e)),
            }
        }

        Err(last_conflict.map_or_else(
            || StoreError::Unavailable("could not allocate document id".to_owned()),
            StoreError::Database,
        ))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "postgres"
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_decode_row_object() {
        let doc = decode_row((
            "abc".to_string(),
            Json(json!({ "name": "PineBook Air", "id": "ignored" })),
        ));
        assert!(matches!(doc, Ok(ref d) if d.id.as_str() == "abc" && !d.fields.contains_key("id")));
    }

    #[test]
    fn test_decode_row_rejects_non_object() {
        let doc = decode_row(("abc".to_string(), Json(json!([1, 2, 3]))));
        assert!(matches!(doc, Err(StoreError::Decode(_))));
    }
}
