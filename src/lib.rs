// Allow panic/unwrap/expect in tests (denied globally via Cargo.toml lints)
#![cfg_attr(
    test,
    allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::indexing_slicing,
        clippy::float_cmp
    )
)]

pub mod config;
pub mod cors;
pub mod http_logging;
pub mod item;
pub mod logging;
pub mod metrics;
pub mod server;

// Re-export commonly used types
pub use config::{load_config, ConfigError, DaemonConfig, ServerConfig};
pub use item::{Item, ItemCollection, ItemError, ItemPatch, NewItem};
pub use server::{build_router, AppState, ShutdownSignal};
