//! Order and shipping types.
//!
//! An `Order` is created only by the Order Service in response to a create
//! request and is never mutated afterwards. The `ShippingAddress` draft is
//! owned by the checkout flow for the duration of one session and discarded
//! on success or abandonment.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::OrderId;
use super::product::Product;

/// Shipping address collected during checkout.
///
/// All fields are plain strings mutated field-by-field by user input.
/// `apt_number` is optional in meaning but kept as a string (possibly empty)
/// to match the wire format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddress {
    pub first_name: String,
    pub last_name: String,
    pub street_address: String,
    pub apt_number: String,
    pub state: String,
    pub zip: String,
}

impl ShippingAddress {
    /// Whether the required fields for the shipping step are filled in.
    ///
    /// `apt_number` and `state` are not required; this mirrors the shipping
    /// form, which gates on first name, last name, street address and zip.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.first_name.is_empty()
            && !self.last_name.is_empty()
            && !self.street_address.is_empty()
            && !self.zip.is_empty()
    }
}

/// Order status.
///
/// The service only ever assigns `Pending`; nothing in this scope advances
/// an order past that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Pending,
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
        }
    }
}

/// Payload sent to the Order Service to create an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    /// Snapshot of the purchased product.
    pub product: Product,
    /// Selected size label (may be empty; the flow never blocks on it).
    pub size: String,
    /// Snapshot of the shipping address draft.
    pub shipping_address: ShippingAddress,
    /// Total charged, in minor currency units.
    pub total: i64,
}

/// An order as stored and returned by the Order Service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Service-assigned ID, starting at 1.
    pub id: OrderId,
    pub product: Product,
    pub size: String,
    pub shipping_address: ShippingAddress,
    pub total: i64,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_address() -> ShippingAddress {
        ShippingAddress {
            first_name: "A".to_string(),
            last_name: "B".to_string(),
            street_address: "C".to_string(),
            apt_number: String::new(),
            state: "D".to_string(),
            zip: "E".to_string(),
        }
    }

    #[test]
    fn test_address_complete_requires_four_fields() {
        assert!(filled_address().is_complete());

        let missing_last_name = ShippingAddress {
            last_name: String::new(),
            ..filled_address()
        };
        assert!(!missing_last_name.is_complete());

        let missing_zip = ShippingAddress {
            zip: String::new(),
            ..filled_address()
        };
        assert!(!missing_zip.is_complete());
    }

    #[test]
    fn test_address_complete_ignores_optional_fields() {
        let no_apt_no_state = ShippingAddress {
            apt_number: String::new(),
            state: String::new(),
            ..filled_address()
        };
        assert!(no_apt_no_state.is_complete());
    }

    #[test]
    fn test_order_status_serializes_as_pending() {
        let json = serde_json::to_string(&OrderStatus::Pending).expect("serialize");
        assert_eq!(json, "\"pending\"");
        assert_eq!(OrderStatus::Pending.to_string(), "pending");
    }

    #[test]
    fn test_shipping_address_wire_format() {
        let json = serde_json::to_value(filled_address()).expect("serialize");
        assert_eq!(json["firstName"], "A");
        assert_eq!(json["streetAddress"], "C");
        assert_eq!(json["aptNumber"], "");
    }
}
