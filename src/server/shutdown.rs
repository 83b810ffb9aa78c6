use tokio::sync::watch;
use tracing::{info, warn};

/// Signal type for daemon shutdown
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShutdownSignal {
    None,
    Shutdown,
}

/// Resolve once `Shutdown` is published on the channel, or the sender is gone.
pub async fn wait_for_shutdown(mut shutdown_rx: watch::Receiver<ShutdownSignal>) {
    loop {
        if *shutdown_rx.borrow_and_update() == ShutdownSignal::Shutdown {
            info!("Received shutdown signal, stopping server...");
            return;
        }
        if shutdown_rx.changed().await.is_err() {
            info!("Shutdown channel closed, stopping server...");
            return;
        }
    }
}

/// Publish `Shutdown` when the process receives Ctrl-C or SIGTERM.
pub async fn forward_os_signals(shutdown_tx: watch::Sender<ShutdownSignal>) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    if shutdown_tx.send(ShutdownSignal::Shutdown).is_err() {
        warn!("Shutdown requested but the server has already stopped");
    }
}
