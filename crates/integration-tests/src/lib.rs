//! Integration tests for Vermilion.
//!
//! Each test spins up the Order Service router on an ephemeral port and
//! drives it over real HTTP, either with raw `reqwest` (to pin the wire
//! contract) or through the `vermilion-checkout` adapter and flow.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p vermilion-integration-tests
//! ```

#![allow(clippy::expect_used)]

use vermilion_order_service::config::ServiceConfig;
use vermilion_order_service::state::AppState;

/// A running in-process Order Service.
pub struct TestService {
    /// Root URL (e.g., `http://127.0.0.1:49152`).
    pub base_url: String,
    /// API base URL, as the checkout client expects it.
    pub api_url: String,
}

/// Bind the service router to an ephemeral port and serve it in the
/// background for the lifetime of the test process.
///
/// # Panics
///
/// Panics if the listener cannot be bound.
pub async fn spawn_service() -> TestService {
    let state = AppState::new(ServiceConfig::default());
    let app = vermilion_order_service::app(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Failed to read local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server error");
    });

    TestService {
        base_url: format!("http://{addr}"),
        api_url: format!("http://{addr}/api"),
    }
}

/// An API base URL with nothing listening behind it, for failure-path tests.
///
/// # Panics
///
/// Panics if the throwaway listener cannot be bound.
pub async fn unreachable_api_url() -> String {
    // Bind to grab a free port, then drop the listener so connections are
    // refused.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind throwaway listener");
    let addr = listener.local_addr().expect("Failed to read local addr");
    drop(listener);

    format!("http://{addr}/api")
}
