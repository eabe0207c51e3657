//! Vermilion Checkout - client-side checkout flow.
//!
//! This crate owns the only stateful part of the storefront demo: the
//! checkout state machine (`Browsing -> Cart -> Checkout -> confirmation`)
//! and the thin HTTP adapter it uses to talk to the Order Service.
//!
//! # Modules
//!
//! - [`client`] - reqwest adapter for the Order Service REST API
//! - [`flow`] - the checkout state machine
//! - [`summary`] - display-only order summary breakdown

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod client;
pub mod flow;
pub mod summary;

pub use client::{ApiError, OrderServiceClient};
pub use flow::{CONFIRMATION_DELAY, CheckoutFlow, CheckoutState, CheckoutStep};
pub use summary::OrderSummary;
