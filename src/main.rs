// Allow panic/unwrap/expect in tests (denied globally via Cargo.toml lints)
#![cfg_attr(
    test,
    allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::indexing_slicing
    )
)]

mod app;

use std::net::SocketAddr;
use std::sync::Arc;

use app::{report_server_error, Args};
use clap::Parser;
use color_eyre::eyre::Result;
use items_daemon::config::{load_config, parse_origins, DaemonConfig};
use items_daemon::logging::{
    self, default_log_dir, init_logging, parse_rotation, LogConfig, LOG_FILENAME,
};
use items_daemon::server::{forward_os_signals, wait_for_shutdown, ShutdownSignal};
use items_daemon::{build_router, AppState, ItemCollection};
use tokio::net::TcpListener;
use tokio::sync::watch;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Install color-eyre error hooks for colored error output
    color_eyre::install()?;

    // Parse CLI arguments first (before logging, so we can use log config)
    let args = Args::parse();

    let log_dir = args.log_dir.unwrap_or_else(default_log_dir);
    let log_file = log_dir.join(LOG_FILENAME);
    logging::set_log_file_path(log_file.to_string_lossy().to_string());

    let log_config = LogConfig {
        log_dir,
        json_format: args.log_json,
        rotation: parse_rotation(&args.log_rotation),
        ..Default::default()
    };

    if let Err(e) = init_logging(log_config) {
        eprintln!();
        eprintln!("Error: Failed to initialize logging: {e}");
        eprintln!();
        eprintln!("Logs: {}", log_file.display());
        eprintln!();
        return Err(e);
    }

    // Config file is optional; a broken one is reported and ignored.
    let mut config = load_config(args.config.as_deref()).unwrap_or_else(|e| {
        warn!("Failed to load config, using defaults: {e}");
        DaemonConfig::default()
    });
    if let Some(origins) = args.cors_origins {
        config.server.cors_origins = parse_origins(origins);
    }

    let addr: SocketAddr = args.addr.parse()?;

    info!(
        "CORS origins: {}",
        config.server.cors_origins.join(", ")
    );

    let items = Arc::new(ItemCollection::with_items(config.seed));
    info!("Seeded {} item(s)", items.len().await);
    let app = build_router(AppState::with_config(items, config.server));

    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            report_server_error(addr, &log_file, &e);
            return Err(e.into());
        }
    };

    let (shutdown_tx, shutdown_rx) = watch::channel(ShutdownSignal::None);
    tokio::spawn(forward_os_signals(shutdown_tx));

    info!("Starting items daemon on {}", addr);

    let server_result = axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_shutdown(shutdown_rx))
        .await;

    if let Err(e) = server_result {
        report_server_error(addr, &log_file, &e);
        return Err(e.into());
    }

    info!("Items daemon stopped");
    Ok(())
}
