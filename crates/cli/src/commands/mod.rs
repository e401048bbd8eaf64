//! Subcommand implementations.

pub mod cart;
pub mod migrate;
pub mod products;
pub mod seed;

use pineapple_core::Product;

/// One-line summary used by every listing.
fn product_line(product: &Product) -> String {
    format!(
        "{:<22} {:<28} {:<8} {:>10}",
        product.id,
        product.details.name,
        product.details.category,
        product.details.price.to_string()
    )
}
