//! Pineapple Core - Shared types library.
//!
//! This crate provides common types used across all Pineapple components:
//! - `api` - Catalog service over the `products` document collection
//! - `cli` - Storefront client (catalog browsing, local cart, migrations)
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access,
//! no HTTP clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Document IDs, prices, products and the client cart
//! - [`envelope`] - JSON envelopes exchanged between the API and its clients

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod envelope;
pub mod types;

pub use types::*;
