use anyhow::Context;
use basket_analytics::load_orders_csv;
use gateway::config::Config;
use gateway::shutdown::shutdown_signal;
use gateway::{create_router, AppState};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!(
        version = basket_analytics::SERVICE_VERSION,
        "Starting Basket KPIs API service"
    );

    let config = Config::from_env()?;

    // The dataset must be fully loaded before the listener opens
    let table = load_orders_csv(&config.data_path)
        .with_context(|| format!("loading orders from {}", config.data_path.display()))?;
    let state = AppState::new(table);

    let app = create_router(state);

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "Application startup completed");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let signal = shutdown_signal().await;
            tracing::info!(%signal, "Shutdown signal received");
        })
        .await?;

    tracing::info!("Application shutdown");
    Ok(())
}
