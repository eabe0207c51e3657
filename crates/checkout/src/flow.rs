//! The checkout state machine.
//!
//! Owns the `Browsing -> Cart -> Checkout` application state, the shipping
//! draft, the selected product/size, and drives the transition through order
//! submission and confirmation. All transitions are user-event-driven; events
//! that are not valid in the current state are ignored, the same way the UI
//! simply does not offer the button.
//!
//! Failure policy: product-load and order-submission failures are logged and
//! the flow stays where it is. There is no retry path and no user-visible
//! error surface beyond the absence of a product.

use std::time::Duration;

use vermilion_core::{NewOrder, Order, Product, ShippingAddress, order_total};

use crate::client::OrderServiceClient;

/// How long the order confirmation is shown before the flow resets.
pub const CONFIRMATION_DELAY: Duration = Duration::from_secs(3);

/// Sub-step within checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutStep {
    Shipping,
    Payment,
}

/// Top-level application state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutState {
    Browsing,
    Cart,
    Checkout { step: CheckoutStep },
}

/// The client-side checkout controller.
///
/// Exactly one product is "selected" at any time once the catalog has loaded
/// (single-item checkout only). The selected size may stay empty; the flow
/// never blocks progression on it.
pub struct CheckoutFlow {
    client: OrderServiceClient,
    state: CheckoutState,
    products: Vec<Product>,
    selected: Option<Product>,
    selected_size: String,
    draft: ShippingAddress,
    order_success: bool,
}

impl CheckoutFlow {
    /// Create a flow in the initial `Browsing` state with no catalog loaded.
    #[must_use]
    pub fn new(client: OrderServiceClient) -> Self {
        Self {
            client,
            state: CheckoutState::Browsing,
            products: Vec::new(),
            selected: None,
            selected_size: String::new(),
            draft: ShippingAddress::default(),
            order_success: false,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Current application state.
    #[must_use]
    pub const fn state(&self) -> CheckoutState {
        self.state
    }

    /// The loaded catalog (empty until products load, or on load failure).
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// The active product, if the catalog loaded non-empty.
    #[must_use]
    pub fn selected_product(&self) -> Option<&Product> {
        self.selected.as_ref()
    }

    /// Selected size label; empty string means unselected.
    #[must_use]
    pub fn selected_size(&self) -> &str {
        &self.selected_size
    }

    /// The in-progress shipping draft.
    #[must_use]
    pub const fn draft(&self) -> &ShippingAddress {
        &self.draft
    }

    /// Mutable access to the shipping draft, for field-by-field input.
    pub fn draft_mut(&mut self) -> &mut ShippingAddress {
        &mut self.draft
    }

    /// Whether the confirmation screen is currently showing.
    #[must_use]
    pub const fn order_success(&self) -> bool {
        self.order_success
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// Load the catalog from the Order Service.
    ///
    /// On success the first product becomes the active selection. On failure
    /// the error is logged and the flow continues with no product; there is
    /// no retry.
    pub async fn load_products(&mut self) {
        match self.client.list_products().await {
            Ok(products) => self.products_loaded(products),
            Err(error) => {
                tracing::error!(%error, "Failed to fetch products");
            }
        }
    }

    /// Apply the "products loaded" transition directly.
    pub fn products_loaded(&mut self, products: Vec<Product>) {
        self.selected = products.first().cloned();
        self.products = products;
        self.state = CheckoutState::Browsing;
    }

    /// Select a size for the active product.
    pub fn select_size(&mut self, size: impl Into<String>) {
        self.selected_size = size.into();
    }

    /// Browsing -> Cart.
    pub fn view_cart(&mut self) {
        if matches!(self.state, CheckoutState::Browsing) {
            self.state = CheckoutState::Cart;
        }
    }

    /// Cart -> Browsing.
    pub fn continue_shopping(&mut self) {
        if matches!(self.state, CheckoutState::Cart) {
            self.state = CheckoutState::Browsing;
        }
    }

    /// Cart -> Checkout (shipping step).
    pub fn proceed_to_checkout(&mut self) {
        if matches!(self.state, CheckoutState::Cart) {
            self.state = CheckoutState::Checkout {
                step: CheckoutStep::Shipping,
            };
        }
    }

    /// Checkout -> Cart (the checkout header's back action).
    pub fn back_to_cart(&mut self) {
        if matches!(self.state, CheckoutState::Checkout { .. }) {
            self.state = CheckoutState::Cart;
        }
    }

    /// Payment step -> shipping step.
    pub fn back_to_shipping(&mut self) {
        if matches!(
            self.state,
            CheckoutState::Checkout {
                step: CheckoutStep::Payment
            }
        ) {
            self.state = CheckoutState::Checkout {
                step: CheckoutStep::Shipping,
            };
        }
    }

    /// Submit the shipping step.
    ///
    /// Transitions to the payment step only when first name, last name,
    /// street address and zip are all non-empty; otherwise stays put.
    /// Returns whether the transition happened.
    pub fn submit_shipping(&mut self) -> bool {
        let at_shipping = matches!(
            self.state,
            CheckoutState::Checkout {
                step: CheckoutStep::Shipping
            }
        );

        if at_shipping && self.draft.is_complete() {
            self.state = CheckoutState::Checkout {
                step: CheckoutStep::Payment,
            };
            return true;
        }
        false
    }

    /// Complete the order from the payment step.
    ///
    /// Computes the total as price + shipping fee + flat tax and submits it.
    /// On success the confirmation flag is set and the created order is
    /// returned; call [`Self::settle_confirmation`] to wait out the
    /// confirmation display and reset. On failure the error is logged and the
    /// flow stays on the payment step.
    ///
    /// A submission holds the flow exclusively for its whole duration, and
    /// while the confirmation is showing a second trigger is ignored, so a
    /// rapid double trigger cannot produce a duplicate order.
    pub async fn place_order(&mut self) -> Option<Order> {
        if !matches!(
            self.state,
            CheckoutState::Checkout {
                step: CheckoutStep::Payment
            }
        ) {
            return None;
        }
        if self.order_success {
            tracing::debug!("Order already placed, awaiting confirmation reset");
            return None;
        }
        let product = self.selected.clone()?;

        let payload = NewOrder {
            total: order_total(product.price),
            size: self.selected_size.clone(),
            shipping_address: self.draft.clone(),
            product,
        };
        let result = self.client.create_order(&payload).await;

        match result {
            Ok(order) => {
                tracing::info!(order_id = %order.id, total = order.total, "Order placed");
                self.order_success = true;
                Some(order)
            }
            Err(error) => {
                tracing::error!(%error, "Failed to place order");
                None
            }
        }
    }

    /// Show the confirmation for the fixed delay, then reset to `Browsing`
    /// with an empty shipping draft.
    ///
    /// Does nothing unless an order just succeeded. The timer is not
    /// cancellable once started.
    pub async fn settle_confirmation(&mut self) {
        if !self.order_success {
            return;
        }

        tokio::time::sleep(CONFIRMATION_DELAY).await;

        self.draft = ShippingAddress::default();
        self.order_success = false;
        self.state = CheckoutState::Browsing;
    }
}
