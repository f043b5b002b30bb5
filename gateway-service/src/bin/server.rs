//! Gateway server binary

use gateway_service::{seed_merchant, Gateway, GatewayConfig, Metrics};
use merchant_registry::InMemoryStore;
use std::sync::Arc;
use validation_engine::RequestValidator;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting Meridian Gateway");

    // Load configuration
    let config = GatewayConfig::from_env()?;

    // Merchant store and startup seeding
    let store = Arc::new(InMemoryStore::new());
    let metrics = Metrics::new()?;
    seed_merchant(store.as_ref(), &config.seed, &metrics)?;

    let gateway = Gateway::new(store, RequestValidator::default(), metrics);
    tracing::info!(merchants = gateway.merchant_count()?, "Gateway ready");

    // TODO: mount the HTTP transport and metrics scrape endpoint here
    // For now, just keep running
    tokio::signal::ctrl_c().await?;

    tracing::info!("Shutting down gateway");
    Ok(())
}
