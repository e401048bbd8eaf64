//! Core types for Pineapple.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod cart;
pub mod id;
pub mod price;
pub mod product;

pub use cart::{CART_STORAGE_KEY, Cart};
pub use id::*;
pub use price::{Price, PriceError};
pub use product::{Category, PRODUCTS_COLLECTION, Product, ProductDetails};
