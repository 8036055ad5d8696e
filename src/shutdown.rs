use std::future::Future;
use std::io;

use tracing::{error, info};

/// Resolves on Ctrl-C or SIGTERM.
///
/// A listener that cannot be installed never resolves, so only a delivered
/// signal starts graceful shutdown.
pub async fn shutdown_signal() {
    let ctrl_c = listen("Ctrl-C", tokio::signal::ctrl_c());

    #[cfg(unix)]
    let terminate = listen("SIGTERM", async {
        let mut sig = tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())?;
        sig.recv().await;
        Ok::<_, io::Error>(())
    });

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}

async fn listen(name: &str, signal: impl Future<Output = io::Result<()>>) {
    if let Err(e) = signal.await {
        error!(error = %e, signal = name, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
