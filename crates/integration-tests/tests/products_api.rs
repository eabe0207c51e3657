//! Integration tests for the product routes.
//!
//! Run with: cargo test -p vermilion-integration-tests

#![allow(clippy::expect_used)]
#![allow(clippy::unwrap_used)]

use reqwest::StatusCode;
use serde_json::Value;
use vermilion_checkout::{ApiError, OrderServiceClient};
use vermilion_core::ProductId;
use vermilion_integration_tests::spawn_service;

#[tokio::test]
async fn test_health_endpoint() {
    let service = spawn_service().await;

    let resp = reqwest::get(format!("{}/health", service.base_url))
        .await
        .expect("Failed to reach health endpoint");

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.text().await.expect("Failed to read body"), "ok");
}

#[tokio::test]
async fn test_list_products_wire_contract() {
    let service = spawn_service().await;

    let resp = reqwest::get(format!("{}/products", service.api_url))
        .await
        .expect("Failed to list products");
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = resp.json().await.expect("Failed to parse body");
    let products = body.as_array().expect("Expected a JSON array");
    assert_eq!(products.len(), 2);

    let first = &products[0];
    assert_eq!(first["id"], 1);
    assert_eq!(first["name"], "Silhouette No. 1 - Vermilion");
    assert_eq!(first["price"], 7999);
    assert!(first["images"].as_array().is_some_and(|a| !a.is_empty()));
    assert_eq!(first["category"], "Outerwear");
}

#[tokio::test]
async fn test_get_product_returns_matching_product_for_every_seeded_id() {
    let service = spawn_service().await;
    let client = OrderServiceClient::new(service.api_url);

    let products = client.list_products().await.expect("Failed to list");
    assert!(!products.is_empty());

    for expected in &products {
        let product = client
            .get_product(expected.id)
            .await
            .expect("Seeded product should resolve");
        assert_eq!(&product, expected);
    }
}

#[tokio::test]
async fn test_get_unknown_product_is_not_found() {
    let service = spawn_service().await;

    // Raw wire contract: 404 with a message body.
    let resp = reqwest::get(format!("{}/products/999", service.api_url))
        .await
        .expect("Failed to request product");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = resp.json().await.expect("Failed to parse body");
    assert_eq!(body["message"], "Product not found");

    // Adapter surface: typed NotFound error.
    let client = OrderServiceClient::new(service.api_url);
    let err = client
        .get_product(ProductId::new(999))
        .await
        .expect_err("Unknown id should fail");
    assert!(matches!(err, ApiError::NotFound(id) if id == ProductId::new(999)));
}
