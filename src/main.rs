use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::info;

use logdash_core::app_state::build_app_state;
use logdash_core::config::AppConfig;
use logdash_core::logging::init_tracing;
use logdash_core::routes::app_router;
use logdash_core::shutdown::shutdown_signal;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env()?;
    let _guard = init_tracing(&config)?;

    info!(log_directory = %config.log_directory.display(), "🚀 Starting logdash");

    let state = build_app_state(&config);
    let app = app_router().with_state(state);

    let addr = config.socket_addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!(%addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Shutdown complete");
    Ok(())
}
