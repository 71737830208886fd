//! Configuration loader for GadgetBuddy.
//!
//! Reads `config.toml` from the data directory (`~/.gadgetbuddy/` by
//! default) and deserializes it into [`AppConfig`]. Falls back to defaults
//! when the file is missing or malformed.

use std::path::{Path, PathBuf};

use gadgetbuddy_types::config::AppConfig;

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "GADGETBUDDY_DATA_DIR";

/// Environment variable overriding `server.port`.
pub const PORT_ENV: &str = "PORT";

/// Resolve the data directory: `$GADGETBUDDY_DATA_DIR`, else `~/.gadgetbuddy`.
///
/// Falls back to `./.gadgetbuddy` when no home directory is known.
pub fn resolve_data_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV).filter(|d| !d.is_empty()) {
        return PathBuf::from(dir);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".gadgetbuddy")
}

/// Load configuration from `{data_dir}/config.toml`.
///
/// - If the file does not exist, returns [`AppConfig::default()`].
/// - If the file exists but fails to parse, logs a warning and returns the default.
/// - Otherwise returns the parsed config; missing sections take their defaults.
///
/// `PORT` in the environment overrides `server.port` in every case.
pub async fn load_config(data_dir: &Path) -> AppConfig {
    let mut config = read_config_file(data_dir).await;
    apply_port_override(&mut config, std::env::var(PORT_ENV).ok().as_deref());
    config
}

async fn read_config_file(data_dir: &Path) -> AppConfig {
    let config_path = data_dir.join("config.toml");

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config.toml found at {}, using defaults", config_path.display());
            return AppConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return AppConfig::default();
        }
    };

    match toml::from_str::<AppConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            AppConfig::default()
        }
    }
}

fn apply_port_override(config: &mut AppConfig, port: Option<&str>) {
    let Some(raw) = port else {
        return;
    };
    match raw.trim().parse::<u16>() {
        Ok(port) => config.server.port = port,
        Err(err) => tracing::warn!("Ignoring {PORT_ENV}={raw:?}: {err}"),
    }
}
