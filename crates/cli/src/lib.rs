//! Pineapple storefront client library.
//!
//! HTTP access to the catalog API plus the client-local storage that keeps
//! the shopping cart between runs.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod client;
pub mod storage;

pub use client::{CatalogClient, ClientError, DEFAULT_API_URL};
pub use storage::{DEFAULT_STORAGE_PATH, LocalStorage, StorageError};
