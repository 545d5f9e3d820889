//! # Orders Application
//!
//! Binary that wires together all the components:
//! - Load configuration from environment
//! - Initialize the in-memory repository adapter
//! - Create the simulated payment gateway
//! - Start the HTTP server

mod config;

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use orders_hex::inbound::HttpServer;
use orders_repo::InMemoryOrderRepository;
use payment_gateways::FakePaymentGateway;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,orders_app=debug,orders_hex=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = config::Config::from_env()?;

    tracing::info!("Starting orders server on port {}", config.port);
    tracing::info!(
        "Gateway approval rate: {}",
        config.gateway_approval_rate
    );

    // Build the adapters
    let repo = Arc::new(InMemoryOrderRepository::new());
    let gateway = Arc::new(FakePaymentGateway::new(config.gateway_approval_rate));

    // Create and run the HTTP server
    let server = HttpServer::new(repo, gateway);
    let addr = format!("0.0.0.0:{}", config.port);

    server.run(&addr).await?;

    Ok(())
}
