//! Daemon configuration loaded from `~/.items-daemon/config.toml`.
//!
//! The file is optional; if it does not exist every field falls back to its
//! `Default` value. Command-line flags override what the file sets.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

use crate::cors::DEFAULT_CORS_ORIGINS;
use crate::item::Item;

/// Default request body limit for JSON payloads.
pub const DEFAULT_MAX_BODY_BYTES: usize = 64 * 1024;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// HTTP server settings (`[server]` table).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// Largest accepted request body, in bytes.
    pub max_body_bytes: usize,
    /// Allowed CORS origin prefixes. `"*"` allows any origin.
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            cors_origins: parse_origins(DEFAULT_CORS_ORIGINS.split(',')),
        }
    }
}

/// Top-level daemon configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DaemonConfig {
    #[serde(default)]
    pub server: ServerConfig,

    /// Items loaded into the collection at startup (`[[seed]]` entries).
    #[serde(default)]
    pub seed: Vec<Item>,
}

/// Trim origins and drop empty entries.
pub fn parse_origins<I, S>(origins: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    origins
        .into_iter()
        .map(|s| s.as_ref().trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Canonical config file location (`~/.items-daemon/config.toml`).
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".items-daemon").join("config.toml"))
}

/// Load the daemon configuration from `path`, or from the default location.
///
/// Returns `Ok(DaemonConfig::default())` if the file does not exist.
pub fn load_config(path: Option<&Path>) -> Result<DaemonConfig, ConfigError> {
    let path = match path.map(Path::to_path_buf).or_else(default_config_path) {
        Some(p) => p,
        None => {
            warn!("Could not determine config directory; using defaults");
            return Ok(DaemonConfig::default());
        }
    };

    if !path.exists() {
        debug!("Config not found at {}; using defaults", path.display());
        return Ok(DaemonConfig::default());
    }

    let content = std::fs::read_to_string(&path)?;
    let config: DaemonConfig = toml::from_str(&content)?;
    debug!(
        seeded = config.seed.len(),
        "Loaded config from {}",
        path.display()
    );
    Ok(config)
}
