//! Catalog browsing commands.

use tracing::{error, info, warn};

use pineapple_cli::{CatalogClient, ClientError};
use pineapple_core::{Category, Product};

use super::product_line;

/// Fetch the products for a filter. Fetch failures are logged and yield an
/// empty list.
pub async fn fetch(client: &CatalogClient, category: Option<&str>) -> Vec<Product> {
    let result = match category_filter(category) {
        None => client.list_products().await,
        Some(tag) => client.list_by_category(tag).await,
    };

    result.unwrap_or_else(|e| {
        error!(error = %e, api = %client.base_url(), "Error fetching products");
        Vec::new()
    })
}

/// Category tag to query, or `None` to list everything.
///
/// Tags outside the menu are still queried since the category set is open,
/// but they usually indicate a typo.
fn category_filter(category: Option<&str>) -> Option<&str> {
    let tag = category?;
    match Category::from_tag(tag) {
        Some(Category::All) => None,
        Some(_) => Some(tag),
        None => {
            warn!(category = tag, "Category is not in the filter menu");
            Some(tag)
        }
    }
}

/// List products, optionally filtered by category tag.
pub async fn list(client: &CatalogClient, category: Option<&str>) {
    let products = fetch(client, category).await;
    info!(count = products.len(), ?category, "Fetched products");

    #[allow(clippy::print_stdout)]
    {
        if products.is_empty() {
            println!("No products found.");
            return;
        }
        for product in &products {
            println!("{}", product_line(product));
        }
    }
}

/// Show one product in full.
///
/// # Errors
///
/// Returns an error for any failure other than a missing product.
pub async fn show(client: &CatalogClient, id: &str) -> Result<(), ClientError> {
    let product = match client.get_product(id).await {
        Ok(product) => product,
        Err(ClientError::NotFound(_)) => {
            #[allow(clippy::print_stdout)]
            {
                println!("Product not found");
            }
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    #[allow(clippy::print_stdout)]
    {
        let details = &product.details;
        println!("{}  ({})", details.name, product.id);
        println!("  {} | {}", details.category, details.price);
        if !details.description.is_empty() {
            println!("  {}", details.description);
        }
        if !details.features.is_empty() {
            println!("  Features: {}", details.features.join(", "));
        }
        if !details.colors.is_empty() {
            println!("  Colors: {}", details.colors.join(", "));
        }
        if !details.image.is_empty() {
            println!("  Image: {}", details.image);
        }
    }
    Ok(())
}

/// Show the headline product: the first one with "Pro" in its name.
pub async fn featured(client: &CatalogClient) {
    let products = fetch(client, None).await;
    let featured = products.iter().find(|p| p.is_featured());

    #[allow(clippy::print_stdout)]
    {
        match featured {
            Some(product) => {
                println!("Featured: {}", product.details.name);
                println!("  {}", product.details.description);
                println!("  From {}", product.details.price);
            }
            None if products.is_empty() => {
                println!("The catalog is empty. Run `pineapple seed` to load demo products.");
            }
            None => println!("No featured product."),
        }
    }
}

/// Print the category filter menu.
pub fn categories() {
    #[allow(clippy::print_stdout)]
    {
        for category in Category::MENU {
            println!("{:<8} {}", category.tag(), category.display_name());
        }
    }
}
