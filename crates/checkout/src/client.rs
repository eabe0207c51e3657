//! Order Service API client.
//!
//! Translates the checkout flow's three operations into HTTP calls against a
//! fixed base URL and parses the JSON responses. Deliberately thin: no retry,
//! no timeout, no idempotency key. A lost response followed by a resend
//! produces a duplicate order; that is an accepted limitation of the demo.

use serde::de::DeserializeOwned;
use thiserror::Error;
use vermilion_core::{NewOrder, Order, Product, ProductId};

/// Default API base URL, matching the service's default bind address.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/api";

/// Errors that can occur when talking to the Order Service.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed (connection, protocol).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-success status.
    #[error("API error: {status} - {message}")]
    Status { status: u16, message: String },

    /// Product lookup returned 404.
    #[error("Product not found: {0}")]
    NotFound(ProductId),

    /// Failed to parse a response body.
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Client for the Order Service REST API.
#[derive(Debug, Clone)]
pub struct OrderServiceClient {
    client: reqwest::Client,
    base_url: String,
}

impl OrderServiceClient {
    /// Create a new client against the given API base URL
    /// (e.g., `http://localhost:3000/api`).
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// The API base URL this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the full product catalog.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Status` on a non-success response and
    /// `ApiError::Parse` if the body is not a valid product list.
    pub async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        let url = format!("{}/products", self.base_url);
        let response = self.client.get(&url).send().await?;

        Self::parse_success(response).await
    }

    /// Fetch a single product by id.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotFound` when the service has no matching id,
    /// `ApiError::Status` on other non-success responses.
    pub async fn get_product(&self, id: ProductId) -> Result<Product, ApiError> {
        let url = format!("{}/products/{id}", self.base_url);
        let response = self.client.get(&url).send().await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound(id));
        }

        Self::parse_success(response).await
    }

    /// Submit an order for creation.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Status` on a non-success response and
    /// `ApiError::Parse` if the created order cannot be decoded.
    pub async fn create_order(&self, order: &NewOrder) -> Result<Order, ApiError> {
        let url = format!("{}/orders", self.base_url);
        let response = self.client.post(&url).json(order).send().await?;

        Self::parse_success(response).await
    }

    /// Turn a response into a decoded body or the matching `ApiError`.
    async fn parse_success<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }
}
