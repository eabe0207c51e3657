//! Vermilion Shop - command-line driver for the checkout flow.
//!
//! # Usage
//!
//! ```bash
//! # List the catalog
//! vermilion-shop browse
//!
//! # Walk the whole checkout flow and place an order
//! vermilion-shop order --size M --first-name Ada --last-name Lovelace \
//!     --street-address "1 Analytical Way" --zip 41815
//! ```
//!
//! # Commands
//!
//! - `browse` - Fetch and print the product catalog
//! - `order` - Drive Browsing -> Cart -> Checkout through to confirmation

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use vermilion_checkout::{CheckoutFlow, OrderServiceClient, OrderSummary, client};

#[derive(Parser)]
#[command(name = "vermilion-shop")]
#[command(author, version, about = "Vermilion storefront demo client")]
struct Cli {
    /// Order Service API base URL
    #[arg(long, env = "ORDER_SERVICE_BASE_URL", default_value = client::DEFAULT_BASE_URL)]
    base_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch and print the product catalog
    Browse,
    /// Walk the checkout flow and place an order
    Order {
        /// Size label to select (may be omitted; checkout does not require one)
        #[arg(long, default_value = "")]
        size: String,

        #[arg(long)]
        first_name: String,

        #[arg(long)]
        last_name: String,

        #[arg(long)]
        street_address: String,

        /// Apartment number (optional)
        #[arg(long, default_value = "")]
        apt_number: String,

        /// State or region (optional)
        #[arg(long, default_value = "")]
        state: String,

        #[arg(long)]
        zip: String,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let client = OrderServiceClient::new(cli.base_url);

    match cli.command {
        Commands::Browse => browse(&client).await?,
        Commands::Order {
            size,
            first_name,
            last_name,
            street_address,
            apt_number,
            state,
            zip,
        } => {
            let mut flow = CheckoutFlow::new(client);
            flow.load_products().await;

            let Some(product) = flow.selected_product().cloned() else {
                return Err("no product available to order".into());
            };

            let summary = OrderSummary::for_product(&product);
            tracing::info!(
                product = %product.name,
                subtotal = summary.subtotal,
                shipping = summary.shipping,
                estimated_tax = summary.estimated_tax,
                display_total = summary.display_total,
                "Order summary"
            );

            flow.select_size(size);
            flow.view_cart();
            flow.proceed_to_checkout();

            let draft = flow.draft_mut();
            draft.first_name = first_name;
            draft.last_name = last_name;
            draft.street_address = street_address;
            draft.apt_number = apt_number;
            draft.state = state;
            draft.zip = zip;

            if !flow.submit_shipping() {
                return Err(
                    "shipping step rejected: first name, last name, street address \
                     and zip are all required"
                        .into(),
                );
            }

            let Some(order) = flow.place_order().await else {
                return Err("order submission failed".into());
            };

            tracing::info!(
                order_id = %order.id,
                status = %order.status,
                total = order.total,
                "Order confirmed! Thank you for your purchase."
            );

            // Confirmation display, then back to browsing.
            flow.settle_confirmation().await;
            tracing::info!("Returning to shopping");
        }
    }

    Ok(())
}

async fn browse(client: &OrderServiceClient) -> Result<(), Box<dyn std::error::Error>> {
    let products = client.list_products().await?;

    for product in products {
        tracing::info!(
            id = %product.id,
            name = %product.name,
            price = product.price,
            category = %product.category,
            sizes = ?product.sizes,
            "Product"
        );
    }

    Ok(())
}
