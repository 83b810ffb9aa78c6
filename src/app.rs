use std::path::PathBuf;

use clap::Parser;

pub const DEFAULT_ADDR: &str = "127.0.0.1:3000";

/// Items Daemon - in-memory item store served over a JSON REST API
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Address to bind the server to
    #[arg(short, long, env = "ITEMS_DAEMON_ADDR", default_value = DEFAULT_ADDR)]
    pub addr: String,
    /// Comma-separated list of allowed CORS origins, overriding the config file.
    /// Use "*" to allow all origins (not recommended for production).
    /// Example: --cors-origins=http://localhost:5173,https://shop.example
    #[arg(long, env = "ITEMS_CORS_ORIGINS", value_delimiter = ',')]
    pub cors_origins: Option<Vec<String>>,
    /// Enable JSON log format (for production/log aggregation)
    #[arg(long, env = "ITEMS_LOG_JSON", default_value = "false")]
    pub log_json: bool,
    /// Log rotation period: daily, hourly, or never
    #[arg(long, env = "ITEMS_LOG_ROTATION", default_value = "daily")]
    pub log_rotation: String,
    /// Custom log directory (default: ~/.items-daemon/logs)
    #[arg(long, env = "ITEMS_LOG_DIR")]
    pub log_dir: Option<PathBuf>,
    /// Config file (default: ~/.items-daemon/config.toml)
    #[arg(long, env = "ITEMS_DAEMON_CONFIG")]
    pub config: Option<PathBuf>,
}

pub fn report_server_error(
    addr: std::net::SocketAddr,
    log_file: &std::path::Path,
    e: &std::io::Error,
) {
    if e.kind() == std::io::ErrorKind::AddrInUse {
        eprintln!();
        eprintln!("Error: Failed to start server - address {addr} is already in use");
        eprintln!();
        eprintln!("Another instance of items-daemon may already be running.");
        eprintln!();
        eprintln!("Options:");
        eprintln!("  1. Kill the existing process:   pkill items-daemon");
        eprintln!("  2. Use a different port:        items-daemon --addr 127.0.0.1:3001");
        eprintln!("  3. Check what's using the port: lsof -i :{}", addr.port());
        eprintln!();
        eprintln!("Logs: {}", log_file.display());
        eprintln!();
        return;
    }
    eprintln!();
    eprintln!("Error: Failed to start server: {e}");
    eprintln!();
    eprintln!("Logs: {}", log_file.display());
    eprintln!();
}
