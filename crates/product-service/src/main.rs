//! # Product Service
//!
//! Serves the product catalogue over HTTP until Ctrl-C, then drains and stops
//! the store.
//!
//! ```bash
//! RUST_LOG=debug PRODUCT_API_ADDR=0.0.0.0:8080 cargo run -p product-service
//! ```

use clap::Parser;
use product_service::config::Config;
use product_service::http;
use product_service::lifecycle::ProductSystem;
use resource_store::tracing::setup_tracing;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = Config::parse();
    info!(addr = %config.addr, buffer_size = config.buffer_size.get(), "Starting product service");

    let system = ProductSystem::new(config.buffer_size.get());
    let app = http::router(system.service.clone());

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    info!(addr = %listener.local_addr()?, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    system.shutdown().await?;
    info!("Product service stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
