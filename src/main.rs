//! Binary entry point: wire the store, service and router, then serve

use orders_api::prelude::*;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "orders_api=info,tower_http=info".into()),
        )
        .init();

    let config = ServerConfig::from_env()?;

    let store = Arc::new(InMemoryOrderStore::new());
    let service = OrderService::new(store);
    let app = build_order_routes(AppState { service });

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    tracing::info!("orders API listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
