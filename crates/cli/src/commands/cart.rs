//! Shopping cart commands.
//!
//! The cart is read from local storage once per invocation and written back
//! after every mutation.

use pineapple_cli::{CatalogClient, LocalStorage, StorageError};
use pineapple_core::{CART_STORAGE_KEY, DocumentId};

use super::products;

/// Print the cart with line prices and the subtotal.
///
/// Prices come from the live catalog; lines whose product is gone are shown
/// without a price and left out of the subtotal.
pub async fn show(client: &CatalogClient, storage: &LocalStorage) {
    let cart = storage.load_cart();

    #[allow(clippy::print_stdout)]
    {
        if cart.is_empty() {
            println!("Your cart is empty.");
            return;
        }

        let catalog = products::fetch(client, None).await;
        for (id, qty) in cart.lines() {
            match catalog.iter().find(|p| &p.id == id) {
                Some(product) => println!(
                    "{qty} x {:<28} {:>10}",
                    product.details.name,
                    (product.details.price * qty).to_string()
                ),
                None => println!("{qty} x {id} (no longer available)"),
            }
        }
        println!("{} items, subtotal {}", cart.item_count(), cart.subtotal(&catalog));
    }
}

/// Add units of a product.
///
/// # Errors
///
/// Returns `StorageError` if the cart cannot be saved.
pub fn add(storage: &mut LocalStorage, id: &str, quantity: u32) -> Result<(), StorageError> {
    let mut cart = storage.load_cart();
    let total = cart.add(DocumentId::new(id), quantity);
    storage.save_cart(&cart)?;

    #[allow(clippy::print_stdout)]
    {
        println!("{id}: {total} in cart");
    }
    Ok(())
}

/// Set a product's quantity; zero removes it.
///
/// # Errors
///
/// Returns `StorageError` if the cart cannot be saved.
pub fn set(storage: &mut LocalStorage, id: &str, quantity: u32) -> Result<(), StorageError> {
    let mut cart = storage.load_cart();
    cart.set_quantity(DocumentId::new(id), quantity);
    storage.save_cart(&cart)
}

/// Remove a product.
///
/// # Errors
///
/// Returns `StorageError` if the cart cannot be saved.
pub fn remove(storage: &mut LocalStorage, id: &str) -> Result<(), StorageError> {
    let mut cart = storage.load_cart();
    if !cart.remove(&DocumentId::new(id)) {
        tracing::debug!(id, "Not in cart");
    }
    storage.save_cart(&cart)
}

/// Empty the cart.
///
/// # Errors
///
/// Returns `StorageError` if the cart cannot be saved.
pub fn clear(storage: &mut LocalStorage) -> Result<(), StorageError> {
    storage.remove_item(CART_STORAGE_KEY)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_mutations_persist_and_clear_drops_key() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("local_storage.json");
        let mut storage = LocalStorage::open(&path).unwrap();

        add(&mut storage, "a", 2).unwrap();
        set(&mut storage, "b", 3).unwrap();
        remove(&mut storage, "a").unwrap();

        let reopened = LocalStorage::open(&path).unwrap();
        assert_eq!(reopened.load_cart().item_count(), 3);

        clear(&mut storage).unwrap();
        let reopened = LocalStorage::open(&path).unwrap();
        assert!(reopened.get_item(CART_STORAGE_KEY).is_none());
        assert!(reopened.load_cart().is_empty());
    }
}
