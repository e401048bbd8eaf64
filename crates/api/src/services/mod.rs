//! Business logic behind the HTTP handlers.

pub mod catalog;
pub mod demo_catalog;
