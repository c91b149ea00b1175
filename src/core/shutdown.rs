use tokio::signal;

/// Resolves on SIGINT or SIGTERM.
pub(crate) async fn shutdown_signal() {
    let received = tokio::select! {
        name = interrupt() => name,
        name = terminate() => name,
    };

    tracing::info!(signal = received, "shutdown signal received");
}

async fn interrupt() -> &'static str {
    if let Err(err) = signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    "SIGINT"
}

#[cfg(unix)]
async fn terminate() -> &'static str {
    match signal::unix::signal(signal::unix::SignalKind::terminate()) {
        Ok(mut stream) => {
            stream.recv().await;
        }
        Err(err) => {
            tracing::error!(error = %err, "Failed to install SIGTERM handler");
            std::future::pending::<()>().await;
        }
    }
    "SIGTERM"
}

#[cfg(not(unix))]
async fn terminate() -> &'static str {
    std::future::pending::<&'static str>().await
}
