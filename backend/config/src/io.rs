//! Config file location and reading.

use crate::schema::RallyscopeConfig;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

/// Default config file name within the config directory.
const CONFIG_FILE_NAME: &str = "config.yaml";

/// Resolve the Rallyscope config directory.
/// Priority: `RALLYSCOPE_CONFIG_DIR` env > `~/.rallyscope/`
pub fn config_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("RALLYSCOPE_CONFIG_DIR") {
        return PathBuf::from(dir);
    }
    dirs::home_dir()
        .map(|home| home.join(".rallyscope"))
        .unwrap_or_else(|| PathBuf::from(".rallyscope"))
}

/// Resolve the full path to the main config file.
pub fn config_file_path(config_dir: &Path) -> PathBuf {
    config_dir.join(CONFIG_FILE_NAME)
}

/// Resolve the config file to load when none is given on the command line.
/// Priority: `RALLYSCOPE_CONFIG` env (full file path) > `<config_dir>/config.yaml`
pub fn default_config_file() -> PathBuf {
    if let Ok(path) = std::env::var("RALLYSCOPE_CONFIG") {
        return PathBuf::from(path);
    }
    config_file_path(&config_dir())
}

/// Load and parse the config from disk.
///
/// Returns `Ok(Default::default())` if the file doesn't exist (first run).
pub async fn load_config(path: &Path) -> Result<RallyscopeConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "Config file does not exist; using defaults");
        return Ok(RallyscopeConfig::default());
    }

    let raw = fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: RallyscopeConfig = serde_yaml::from_str(&raw)
        .with_context(|| format!("Failed to parse config YAML at: {}", path.display()))?;

    info!(path = %path.display(), "Loaded config");
    Ok(config)
}
