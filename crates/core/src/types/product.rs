//! Product catalog types.
//!
//! The API stores products as free-form documents; these types are the typed
//! view used where the shape is known (the demo catalog, client rendering).

use serde::{Deserialize, Serialize};

use super::{DocumentId, Price};

/// Name of the document collection holding products.
pub const PRODUCTS_COLLECTION: &str = "products";

/// A product as returned by the API: store-assigned ID plus its fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: DocumentId,
    #[serde(flatten)]
    pub details: ProductDetails,
}

/// Product fields without an identifier (what gets written to the store).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDetails {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub price: Price,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub colors: Vec<String>,
}

impl Product {
    /// Whether this product should headline the storefront.
    #[must_use]
    pub fn is_featured(&self) -> bool {
        self.details.name.contains("Pro")
    }
}

/// Category filter entries shown by the storefront.
///
/// The category set is open; these are the ones the storefront offers as
/// filters. [`Category::All`] disables filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    All,
    Phone,
    Laptop,
    Tablet,
    Watch,
}

impl Category {
    /// Filter menu order.
    pub const MENU: [Self; 5] = [
        Self::All,
        Self::Phone,
        Self::Laptop,
        Self::Tablet,
        Self::Watch,
    ];

    /// Tag stored in the product's `category` field.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Phone => "phone",
            Self::Laptop => "laptop",
            Self::Tablet => "tablet",
            Self::Watch => "watch",
        }
    }

    /// Human-readable menu label.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::All => "All Products",
            Self::Phone => "Phones",
            Self::Laptop => "Laptops",
            Self::Tablet => "Tablets",
            Self::Watch => "Watches",
        }
    }

    /// Look up a menu entry by its tag. Matching is exact.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::MENU.into_iter().find(|c| c.tag() == tag)
    }

    /// Whether a product belongs under this filter.
    #[must_use]
    pub fn matches(self, product: &Product) -> bool {
        self == Self::All || product.details.category == self.tag()
    }
}
