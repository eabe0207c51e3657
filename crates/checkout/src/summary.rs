//! Display-only order summary breakdown.
//!
//! This mirrors the storefront's summary panel, which estimates tax as 18%
//! of the subtotal. The total submitted with the order uses the flat tax
//! constant instead, and the two figures are intentionally not reconciled;
//! never use this breakdown to compute a charge.

use vermilion_core::{Product, SHIPPING_FEE, estimated_tax};

/// Cost breakdown shown alongside checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderSummary {
    /// Product price in minor units.
    pub subtotal: i64,
    /// Flat shipping fee.
    pub shipping: i64,
    /// Estimated tax (18% of subtotal, rounded).
    pub estimated_tax: i64,
    /// Displayed total; disagrees with the submitted order total.
    pub display_total: i64,
}

impl OrderSummary {
    /// Build the summary for a single-item order of `product`.
    #[must_use]
    pub fn for_product(product: &Product) -> Self {
        let subtotal = product.price;
        let tax = estimated_tax(subtotal);

        Self {
            subtotal,
            shipping: SHIPPING_FEE,
            estimated_tax: tax,
            display_total: subtotal + SHIPPING_FEE + tax,
        }
    }
}
