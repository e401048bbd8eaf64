//! Seed the catalog with demo products.

use tracing::info;

use pineapple_cli::{CatalogClient, ClientError};

use super::product_line;

/// Ask the API to append the demo catalog and print what was added.
///
/// Each run adds another full set; the API does not deduplicate.
///
/// # Errors
///
/// Returns an error if the request fails or the API reports a failure.
pub async fn run(client: &CatalogClient) -> Result<(), ClientError> {
    let report = client.seed().await?;
    info!(count = report.count, "Seeded");

    #[allow(clippy::print_stdout)]
    {
        println!("{} ({} products)", report.message, report.count);
        for product in &report.products {
            println!("  {}", product_line(product));
        }
    }
    Ok(())
}
