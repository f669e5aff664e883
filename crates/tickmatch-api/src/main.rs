use anyhow::Context;
use tickmatch_api::{AppState, create_router, telemetry};
use tickmatch_types::{ApiConfig, constants};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ApiConfig::from_env()?;
    telemetry::init_tracing(&config)?;

    tracing::info!(
        engine = constants::ENGINE_NAME,
        version = constants::VERSION,
        "Starting matching API"
    );

    let app = create_router(AppState::new());

    let listener = TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr))?;

    tracing::info!("Listening on {}", config.listen_addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
