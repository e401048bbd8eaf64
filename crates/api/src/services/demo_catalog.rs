//! Fixed demonstration catalog written by the seed endpoint.

use pineapple_core::{Price, ProductDetails};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

fn product(
    name: &str,
    category: &str,
    price: u32,
    description: &str,
    image: &str,
    features: &[&str],
    colors: &[&str],
) -> ProductDetails {
    ProductDetails {
        name: name.to_string(),
        category: category.to_string(),
        price: Price::from_whole(price),
        description: description.to_string(),
        image: image.to_string(),
        features: strings(features),
        colors: strings(colors),
    }
}

/// The eight demo products, two per category, in insertion order.
#[must_use]
pub fn demo_products() -> Vec<ProductDetails> {
    vec![
        product(
            "Pineapple Phone 15 Pro",
            "phone",
            999,
            "The most powerful Pineapple Phone yet. Features titanium design, A17 Pro chip, and advanced camera system.",
            "https://images.unsplash.com/photo-1592286927505-67dd3c29684d?w=800&auto=format&fit=crop",
            &["6.1-inch display", "A17 Pro chip", "Triple camera system", "128GB storage"],
            &["Natural Titanium", "Blue Titanium", "White Titanium", "Black Titanium"],
        ),
        product(
            "Pineapple Phone 15",
            "phone",
            799,
            "All-day battery life. Super Retina XDR display. Dynamic Island. A powerful camera system.",
            "https://images.unsplash.com/photo-1511707171634-5f897ff02aa9?w=800&auto=format&fit=crop",
            &["6.1-inch display", "A16 chip", "Dual camera system", "128GB storage"],
            &["Pink", "Yellow", "Green", "Blue", "Black"],
        ),
        product(
            "PineBook Pro",
            "laptop",
            1999,
            "Supercharged by M3 Pro or M3 Max. The most advanced chips ever built for a personal computer.",
            "https://images.unsplash.com/photo-1517336714731-489689fd1ca8?w=800&auto=format&fit=crop",
            &["14-inch Liquid Retina XDR", "M3 Pro chip", "Up to 18 hours battery", "512GB SSD"],
            &["Space Black", "Silver"],
        ),
        product(
            "PineBook Air",
            "laptop",
            1199,
            "Incredibly thin and light. M2 chip delivers blazing-fast performance in a fanless design.",
            "https://images.unsplash.com/photo-1496181133206-80ce9b88a853?w=800&auto=format&fit=crop",
            &["13.6-inch display", "M2 chip", "Up to 18 hours battery", "256GB SSD"],
            &["Midnight", "Starlight", "Space Gray", "Silver"],
        ),
        product(
            "PinePad Pro",
            "tablet",
            799,
            "The ultimate tablet experience. M2 chip. All-day battery life. Stunning display.",
            "https://images.unsplash.com/photo-1544244015-0df4b3ffc6b0?w=800&auto=format&fit=crop",
            &["12.9-inch display", "M2 chip", "Face ID", "128GB storage"],
            &["Space Gray", "Silver"],
        ),
        product(
            "PinePad",
            "tablet",
            449,
            "Colorfully reimagined. All-screen design. Powerful A14 Bionic chip. Fast wireless.",
            "https://images.unsplash.com/photo-1561154464-82e9adf32764?w=800&auto=format&fit=crop",
            &["10.9-inch display", "A14 chip", "Touch ID", "64GB storage"],
            &["Blue", "Purple", "Pink", "Starlight", "Space Gray"],
        ),
        product(
            "Pineapple Watch Ultra",
            "watch",
            799,
            "The most rugged and capable Pineapple Watch ever. Titanium case. Extra-long battery life.",
            "https://images.unsplash.com/photo-1434493789847-2f02dc6ca35d?w=800&auto=format&fit=crop",
            &["49mm titanium case", "GPS + Cellular", "Up to 36 hours battery", "Water resistant"],
            &["Natural", "Black"],
        ),
        product(
            "Pineapple Watch Series 9",
            "watch",
            399,
            "A magical way to use your watch without touching the screen. Advanced health features.",
            "https://images.unsplash.com/photo-1579586337278-3befd40fd17a?w=800&auto=format&fit=crop",
            &["45mm case", "GPS + Cellular", "Up to 18 hours battery", "Water resistant"],
            &["Midnight", "Starlight", "Silver", "Product Red"],
        ),
    ]
}
