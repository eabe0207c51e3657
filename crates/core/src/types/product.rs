//! Product catalog types.
//!
//! Products are immutable once loaded: the Order Service owns them and the
//! checkout flow only ever holds a read-only copy.

use serde::{Deserialize, Serialize};

use super::id::ProductId;

/// A catalog product.
///
/// Prices are in minor currency units (e.g., cents). `images` is expected
/// to be non-empty for any product the service serves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product ID.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Price in minor currency units.
    pub price: i64,
    /// Marketing description.
    pub description: String,
    /// Ordered image URLs (first is the featured image).
    pub images: Vec<String>,
    /// Available size labels, in display order.
    pub sizes: Vec<String>,
    /// Category label (e.g., "Outerwear").
    pub category: String,
}
