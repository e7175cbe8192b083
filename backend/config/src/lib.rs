//! `rallyscope-config` — Rallyscope runtime configuration management.
//!
//! Provides:
//! - Typed config schema (server, storage, Gemini endpoint, logging)
//! - YAML read with missing-file defaults
//! - `${ENV_VAR}` substitution
//! - Config redaction for safe logging/display
//! - Schema validation

pub mod env;
pub mod io;
pub mod redact;
pub mod schema;
pub mod validation;

// Re-export most-used types at crate root.
pub use env::{resolve_env_vars, resolve_env_vars_with, MissingEnvVar};
pub use io::{config_dir, config_file_path, default_config_file, load_config};
pub use redact::redact;
pub use schema::{GeminiConfig, LoggingConfig, RallyscopeConfig, ServerConfig, StorageConfig};
pub use validation::{validate, ConfigValidationError, ValidationReport};

use anyhow::{Context, Result};
use serde_json::Value;
use std::path::Path;

/// Load, apply env substitution, and validate a config file.
///
/// This is the main entry point for loading a config at runtime.
/// Validation findings are logged here; callers that need a hard gate
/// (e.g. `serve`) run `validate` themselves and act on the report.
pub async fn load_and_prepare(path: &Path) -> Result<RallyscopeConfig> {
    let raw_config = load_config(path).await?;

    // Serialize to Value for the env substitution pass.
    let value: Value = serde_json::to_value(&raw_config)
        .context("Failed to serialize config for processing")?;

    // Substitute ${VAR} env vars.
    let value = resolve_env_vars(&value).context("Failed to resolve env vars in config")?;

    // Deserialize back to typed config.
    let config: RallyscopeConfig =
        serde_json::from_value(value).context("Failed to deserialize config after processing")?;

    let report = validate(&config);
    for warning in &report.warnings {
        tracing::warn!(path = %warning.path, message = %warning.message, "Config warning");
    }
    for error in &report.errors {
        tracing::error!(path = %error.path, message = %error.message, "Config error");
    }

    Ok(config)
}
