//! Client-local key/value storage.
//!
//! A JSON object file mapping string keys to string values, with the
//! `get_item` / `set_item` / `remove_item` surface of browser local storage.
//! Every write rewrites the whole file.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::warn;

use pineapple_core::{CART_STORAGE_KEY, Cart};

/// Storage file used when `PINEAPPLE_STORAGE_PATH` is unset.
pub const DEFAULT_STORAGE_PATH: &str = ".pineapple/local_storage.json";

/// Errors reading or writing the storage file.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Storage file {path} is not a JSON object of strings: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// File-backed local storage.
#[derive(Debug)]
pub struct LocalStorage {
    path: PathBuf,
    items: BTreeMap<String, String>,
}

impl LocalStorage {
    /// Open the storage file at `path`. A missing file reads as empty.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the file exists but cannot be read or is
    /// not a JSON object of strings.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();

        let items = match std::fs::read_to_string(&path) {
            Ok(raw) if raw.trim().is_empty() => BTreeMap::new(),
            Ok(raw) => serde_json::from_str(&raw).map_err(|source| StorageError::Parse {
                path: path.clone(),
                source,
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(source) => return Err(StorageError::Io { path, source }),
        };

        Ok(Self { path, items })
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn get_item(&self, key: &str) -> Option<&str> {
        self.items.get(key).map(String::as_str)
    }

    /// Store `value` under `key` and persist.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the file cannot be written.
    pub fn set_item(&mut self, key: &str, value: impl Into<String>) -> Result<(), StorageError> {
        self.items.insert(key.to_string(), value.into());
        self.flush()
    }

    /// Remove `key` and persist.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the file cannot be written.
    pub fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        if self.items.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }

    /// Rehydrate the cart. A stored value that does not parse is logged and
    /// treated as an empty cart.
    #[must_use]
    pub fn load_cart(&self) -> Cart {
        let Some(raw) = self.get_item(CART_STORAGE_KEY) else {
            return Cart::new();
        };

        serde_json::from_str(raw).unwrap_or_else(|e| {
            warn!(
                error = %e,
                path = %self.path.display(),
                "Discarding unreadable cart"
            );
            Cart::new()
        })
    }

    /// Overwrite the stored cart.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the file cannot be written.
    pub fn save_cart(&mut self, cart: &Cart) -> Result<(), StorageError> {
        let raw = serde_json::to_string(cart).map_err(|source| StorageError::Parse {
            path: self.path.clone(),
            source,
        })?;
        self.set_item(CART_STORAGE_KEY, raw)
    }

    fn flush(&self) -> Result<(), StorageError> {
        let io_err = |source| StorageError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }

        let raw = serde_json::to_string_pretty(&self.items).map_err(|source| {
            StorageError::Parse {
                path: self.path.clone(),
                source,
            }
        })?;
        std::fs::write(&self.path, raw).map_err(io_err)
    }
}
