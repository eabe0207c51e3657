//! Vermilion Core - Shared types library.
//!
//! This crate provides common types used across the Vermilion components:
//! - `order-service` - The backend storing products and accepting orders
//! - `checkout` - The client-side checkout flow and service adapter
//!
//! # Architecture
//!
//! The core crate contains only types and constants - no I/O, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, products, orders, and pricing constants

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
