//! Rallyscope runtime configuration schema.
//!
//! Typed for serde YAML/JSON deserialization, camelCase on the wire.
//! Every section and field has a default so a missing or partial config
//! file still yields a runnable config (except the Gemini API key, which
//! validation requires for serving).

use serde::{Deserialize, Serialize};

/// Root configuration for the Rallyscope service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RallyscopeConfig {
    /// HTTP gateway bind settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Upload storage settings
    #[serde(default)]
    pub storage: StorageConfig,

    /// Remote inference endpoint settings
    #[serde(default)]
    pub gemini: GeminiConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageConfig {
    /// Directory holding uploaded videos. Created on first write; files are
    /// never cleaned up.
    #[serde(default = "default_upload_dir")]
    pub upload_dir: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            upload_dir: default_upload_dir(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiConfig {
    /// The one required secret. Usually written as `${GEMINI_API_KEY}` in
    /// the YAML and resolved from the environment at load time.
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: default_model(),
            base_url: default_base_url(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_upload_dir() -> String {
    "uploads".to_string()
}

fn default_model() -> String {
    "gemini-pro-vision".to_string()
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_yaml_yields_defaults() {
        let config: RallyscopeConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.storage.upload_dir, "uploads");
        assert_eq!(config.gemini.model, "gemini-pro-vision");
        assert!(config.gemini.api_key.is_empty());
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let yaml = "server:\n  port: 9999\ngemini:\n  apiKey: abc123\n";
        let config: RallyscopeConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.server.port, 9999);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.gemini.api_key, "abc123");
        assert_eq!(
            config.gemini.base_url,
            "https://generativelanguage.googleapis.com/v1beta"
        );
    }

    #[test]
    fn camel_case_field_names_on_the_wire() {
        let yaml = "storage:\n  uploadDir: /tmp/clips\n";
        let config: RallyscopeConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.storage.upload_dir, "/tmp/clips");
    }
}
