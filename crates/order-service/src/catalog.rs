//! Seed product catalog.
//!
//! The demo ships with a fixed two-product catalog; there is no inventory
//! management and no way to add products at runtime.

use vermilion_core::{Product, ProductId};

/// Build the seed catalog served by `GET /api/products`.
#[must_use]
pub fn seed_products() -> Vec<Product> {
    vec![
        Product {
            id: ProductId::new(1),
            name: "Silhouette No. 1 - Vermilion".to_string(),
            price: 7999,
            description: "Product is a philosophy of craft. Every garment is designed \
                          to come softly in out, in movement, in timeless."
                .to_string(),
            images: vec![
                "https://images.pexels.com/photos/2766334/pexels-photo-2766334.jpeg".to_string(),
                "https://images.pexels.com/photos/2766345/pexels-photo-2766345.jpeg".to_string(),
                "https://images.pexels.com/photos/2766339/pexels-photo-2766339.jpeg".to_string(),
            ],
            sizes: vec![
                "XS".to_string(),
                "S".to_string(),
                "M".to_string(),
                "L".to_string(),
                "XL".to_string(),
            ],
            category: "Outerwear".to_string(),
        },
        Product {
            id: ProductId::new(2),
            name: "Urban Edge Jacket - Noir".to_string(),
            price: 6499,
            description: "Sleek urban design meets functionality in this contemporary piece."
                .to_string(),
            images: vec![
                "https://images.pexels.com/photos/2887766/pexels-photo-2887766.jpeg".to_string(),
                "https://images.pexels.com/photos/2887767/pexels-photo-2887767.jpeg".to_string(),
            ],
            sizes: vec![
                "S".to_string(),
                "M".to_string(),
                "L".to_string(),
                "XL".to_string(),
            ],
            category: "Jackets".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_catalog_shape() {
        let products = seed_products();
        assert_eq!(products.len(), 2);

        for product in &products {
            assert!(product.id.as_i32() > 0);
            assert!(!product.images.is_empty());
            assert!(!product.sizes.is_empty());
            assert!(product.price > 0);
        }
    }

    #[test]
    fn test_seed_ids_are_unique() {
        let products = seed_products();
        assert_ne!(products[0].id, products[1].id);
    }
}
