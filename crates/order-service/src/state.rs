//! Application state shared across handlers.

use std::sync::Arc;

use vermilion_core::Product;

use crate::catalog;
use crate::config::ServiceConfig;
use crate::store::OrderStore;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// configuration, the fixed product catalog and the in-memory order store.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ServiceConfig,
    products: Vec<Product>,
    orders: OrderStore,
}

impl AppState {
    /// Create a new application state with the seed catalog and an empty
    /// order store.
    #[must_use]
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                products: catalog::seed_products(),
                orders: OrderStore::new(),
            }),
        }
    }

    /// Get a reference to the service configuration.
    #[must_use]
    pub fn config(&self) -> &ServiceConfig {
        &self.inner.config
    }

    /// Get the product catalog.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.inner.products
    }

    /// Get a reference to the order store.
    #[must_use]
    pub fn orders(&self) -> &OrderStore {
        &self.inner.orders
    }
}
