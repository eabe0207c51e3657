//! End-to-end checkout flow tests against a live in-process service.
//!
//! Run with: cargo test -p vermilion-integration-tests

#![allow(clippy::expect_used)]
#![allow(clippy::unwrap_used)]

use vermilion_checkout::{CheckoutFlow, CheckoutState, CheckoutStep, OrderServiceClient};
use vermilion_core::{OrderStatus, ProductId, ShippingAddress};
use vermilion_integration_tests::{spawn_service, unreachable_api_url};

fn fill_draft(flow: &mut CheckoutFlow) {
    let draft = flow.draft_mut();
    draft.first_name = "A".to_string();
    draft.last_name = "B".to_string();
    draft.street_address = "C".to_string();
    draft.state = "D".to_string();
    draft.zip = "E".to_string();
}

#[tokio::test]
async fn test_full_checkout_flow_end_to_end() {
    let service = spawn_service().await;
    let client = OrderServiceClient::new(service.api_url);
    let mut flow = CheckoutFlow::new(client);

    // Startup: catalog loads, first product becomes the selection.
    flow.load_products().await;
    let product = flow
        .selected_product()
        .expect("Catalog should load")
        .clone();
    assert_eq!(product.id, ProductId::new(1));
    assert_eq!(product.price, 7999);

    // Walk the states.
    flow.select_size("M");
    flow.view_cart();
    flow.proceed_to_checkout();
    fill_draft(&mut flow);
    assert!(flow.submit_shipping());
    assert_eq!(
        flow.state(),
        CheckoutState::Checkout {
            step: CheckoutStep::Payment
        }
    );

    // Complete the order: price 7999 + shipping 200 + flat tax 1400.
    let order = flow.place_order().await.expect("Order should be placed");
    assert_eq!(order.total, 9599);
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.size, "M");
    assert_eq!(order.product.id, product.id);
    assert_eq!(order.shipping_address.first_name, "A");
    assert!(flow.order_success());

    // Confirmation display elapses, flow resets.
    flow.settle_confirmation().await;
    assert_eq!(flow.state(), CheckoutState::Browsing);
    assert!(!flow.order_success());
    assert_eq!(flow.draft(), &ShippingAddress::default());
}

#[tokio::test]
async fn test_load_failure_leaves_flow_browsing_without_product() {
    let api_url = unreachable_api_url().await;
    let client = OrderServiceClient::new(api_url);
    let mut flow = CheckoutFlow::new(client);

    flow.load_products().await;

    assert_eq!(flow.state(), CheckoutState::Browsing);
    assert!(flow.selected_product().is_none());
    assert!(flow.products().is_empty());
}

#[tokio::test]
async fn test_submission_failure_stays_on_payment_step() {
    // Catalog from a live service, then point the flow at a dead one.
    let service = spawn_service().await;
    let live = OrderServiceClient::new(service.api_url.clone());
    let products = live.list_products().await.expect("Failed to list");

    let dead = OrderServiceClient::new(unreachable_api_url().await);
    let mut flow = CheckoutFlow::new(dead);
    flow.products_loaded(products);

    flow.view_cart();
    flow.proceed_to_checkout();
    fill_draft(&mut flow);
    assert!(flow.submit_shipping());

    assert!(flow.place_order().await.is_none());

    // No retry path: the user is left on the payment step, no success flag.
    assert_eq!(
        flow.state(),
        CheckoutState::Checkout {
            step: CheckoutStep::Payment
        }
    );
    assert!(!flow.order_success());

    // A later attempt is permitted once the first settles.
    let recovered = OrderServiceClient::new(service.api_url);
    let mut flow = CheckoutFlow::new(recovered);
    flow.load_products().await;
    flow.view_cart();
    flow.proceed_to_checkout();
    fill_draft(&mut flow);
    flow.submit_shipping();
    assert!(flow.place_order().await.is_some());
}
