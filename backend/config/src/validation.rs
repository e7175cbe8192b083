//! Config validation with user-friendly error messages.

use crate::schema::RallyscopeConfig;
use thiserror::Error;

/// A config validation error with field path and message.
#[derive(Debug, Error)]
#[error("Config validation error at '{path}': {message}")]
pub struct ConfigValidationError {
    pub path: String,
    pub message: String,
}

/// A collection of validation errors found in one pass.
#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    fn error(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigValidationError {
            path: path.into(),
            message: message.into(),
        });
    }

    fn warn(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError {
            path: path.into(),
            message: message.into(),
        });
    }
}

/// Validate the config and return a report of all errors and warnings.
pub fn validate(config: &RallyscopeConfig) -> ValidationReport {
    let mut report = ValidationReport::default();

    if config.gemini.api_key.trim().is_empty() {
        report.error(
            "gemini.apiKey",
            "API key is required; set it (or reference ${GEMINI_API_KEY}) in the config",
        );
    } else if config.gemini.api_key.contains("${") {
        report.error(
            "gemini.apiKey",
            "API key contains an unresolved ${VAR} reference",
        );
    }

    if config.gemini.model.trim().is_empty() {
        report.error("gemini.model", "Model id cannot be empty");
    }
    if config.gemini.base_url.trim().is_empty() {
        report.error("gemini.baseUrl", "Base URL cannot be empty");
    }

    if config.server.port == 0 {
        report.error("server.port", "Port cannot be 0");
    }
    if config.storage.upload_dir.trim().is_empty() {
        report.error("storage.uploadDir", "Upload directory cannot be empty");
    }

    match config.logging.level.as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {}
        other => report.warn(
            "logging.level",
            format!("Unknown log level \"{other}\"; expected trace|debug|info|warn|error"),
        ),
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_fails_on_missing_api_key() {
        let report = validate(&RallyscopeConfig::default());
        assert!(!report.is_valid());
        assert!(report.errors.iter().any(|e| e.path == "gemini.apiKey"));
    }

    #[test]
    fn unresolved_reference_is_an_error() {
        let mut config = RallyscopeConfig::default();
        config.gemini.api_key = "${GEMINI_API_KEY}".to_string();
        let report = validate(&config);
        assert!(report
            .errors
            .iter()
            .any(|e| e.message.contains("unresolved")));
    }

    #[test]
    fn populated_config_is_valid() {
        let mut config = RallyscopeConfig::default();
        config.gemini.api_key = "sk-test".to_string();
        assert!(validate(&config).is_valid());
    }

    #[test]
    fn odd_log_level_is_only_a_warning() {
        let mut config = RallyscopeConfig::default();
        config.gemini.api_key = "sk-test".to_string();
        config.logging.level = "loud".to_string();
        let report = validate(&config);
        assert!(report.is_valid());
        assert_eq!(report.warnings.len(), 1);
    }
}
