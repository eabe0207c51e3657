//! Pricing constants and total computation.
//!
//! All amounts are minor currency units. Shipping and tax are fixed demo
//! constants; there is no rate lookup anywhere in the system.
//!
//! Two tax figures exist on purpose: the flat [`FLAT_TAX`] that goes into the
//! submitted order total, and a display-only 18% estimate used by the order
//! summary. The upstream business rule never reconciled them, so neither do
//! we; [`estimated_tax`] must not be used when computing a charge.

/// Flat shipping fee added to every order.
pub const SHIPPING_FEE: i64 = 200;

/// Flat tax amount added to every submitted order total.
pub const FLAT_TAX: i64 = 1400;

/// Display-only tax rate used by the order summary.
const ESTIMATED_TAX_RATE: f64 = 0.18;

/// Total charged for a single-item order at submission time.
#[must_use]
pub const fn order_total(price: i64) -> i64 {
    price + SHIPPING_FEE + FLAT_TAX
}

/// Display-only tax estimate (18% of subtotal, rounded).
///
/// This intentionally disagrees with [`FLAT_TAX`]; see the module docs.
#[must_use]
pub fn estimated_tax(subtotal: i64) -> i64 {
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    {
        (subtotal as f64 * ESTIMATED_TAX_RATE).round() as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_total_adds_fixed_fees() {
        assert_eq!(order_total(7999), 9599);
        assert_eq!(order_total(6499), 8099);
        assert_eq!(order_total(0), SHIPPING_FEE + FLAT_TAX);
    }

    #[test]
    fn test_estimated_tax_rounds() {
        assert_eq!(estimated_tax(7999), 1440); // 1439.82
        assert_eq!(estimated_tax(100), 18);
        assert_eq!(estimated_tax(0), 0);
    }

    #[test]
    fn test_tax_formulas_disagree() {
        // The submitted total uses the flat amount, not the estimate.
        assert_ne!(estimated_tax(7999), FLAT_TAX);
    }
}
