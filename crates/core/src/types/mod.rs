//! Core types for Vermilion.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod order;
pub mod pricing;
pub mod product;

pub use id::*;
pub use order::{NewOrder, Order, OrderStatus, ShippingAddress};
pub use pricing::{FLAT_TAX, SHIPPING_FEE, estimated_tax, order_total};
pub use product::Product;
