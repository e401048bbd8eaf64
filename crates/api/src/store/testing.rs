//! Store doubles for tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde_json::{Map, Value};

use pineapple_core::DocumentId;

use super::{Document, DocumentStore, MemoryStore, StoreError};

fn unavailable() -> StoreError {
    StoreError::Unavailable("connection refused".to_owned())
}

/// A store whose every operation fails, like an unreachable database.
pub struct UnavailableStore;

#[async_trait]
impl DocumentStore for UnavailableStore {
    async fn list(&self, _collection: &str) -> Result<Vec<Document>, StoreError> {
        Err(unavailable())
    }

    async fn find_where(
        &self,
        _collection: &str,
        _field: &str,
        _value: &Value,
    ) -> Result<Vec<Document>, StoreError> {
        Err(unavailable())
    }

    async fn get(
        &self,
        _collection: &str,
        _id: &DocumentId,
    ) -> Result<Option<Document>, StoreError> {
        Err(unavailable())
    }

    async fn insert(
        &self,
        _collection: &str,
        _fields: Map<String, Value>,
    ) -> Result<DocumentId, StoreError> {
        Err(unavailable())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Err(unavailable())
    }

    fn backend(&self) -> &'static str {
        "unavailable"
    }
}

/// A memory store that starts failing inserts after `remaining` succeed.
pub struct FailingInserts {
    pub inner: MemoryStore,
    remaining: AtomicUsize,
}

impl FailingInserts {
    pub fn after(successes: usize) -> Self {
        Self {
            inner: MemoryStore::new(),
            remaining: AtomicUsize::new(successes),
        }
    }
}

#[async_trait]
impl DocumentStore for FailingInserts {
    async fn list(&self, collection: &str) -> Result<Vec<Document>, StoreError> {
        self.inner.list(collection).await
    }

    async fn find_where(
        &self,
        collection: &str,
        field: &str,
        value: &Value,
    ) -> Result<Vec<Document>, StoreError> {
        self.inner.find_where(collection, field, value).await
    }

    async fn get(
        &self,
        collection: &str,
        id: &DocumentId,
    ) -> Result<Option<Document>, StoreError> {
        self.inner.get(collection, id).await
    }

    async fn insert(
        &self,
        collection: &str,
        fields: Map<String, Value>,
    ) -> Result<DocumentId, StoreError> {
        let allowed = self
            .remaining
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if !allowed {
            return Err(unavailable());
        }
        self.inner.insert(collection, fields).await
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "failing-inserts"
    }
}
