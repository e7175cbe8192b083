//! `${VAR}` environment substitution for config values.
//!
//! Only uppercase `[A-Z_][A-Z0-9_]*` names are matched, and only string
//! leaves are processed. A referenced variable that is unset or empty is a
//! hard error so a missing API key fails loudly at load time.

use anyhow::Result;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use std::collections::HashMap;

static ENV_VAR_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").unwrap());

/// Error returned for missing env vars.
#[derive(Debug, thiserror::Error)]
#[error("missing env var \"{0}\" referenced in config")]
pub struct MissingEnvVar(pub String);

/// Substitute `${VAR}` references in a config JSON value tree using the
/// process environment.
pub fn resolve_env_vars(value: &Value) -> Result<Value> {
    resolve_env_vars_with(value, &std::env::vars().collect())
}

/// Substitute env vars using a provided map (useful for testing).
pub fn resolve_env_vars_with(value: &Value, env: &HashMap<String, String>) -> Result<Value> {
    match value {
        Value::String(s) => Ok(Value::String(substitute(s, env)?)),
        Value::Array(items) => items
            .iter()
            .map(|item| resolve_env_vars_with(item, env))
            .collect::<Result<Vec<_>>>()
            .map(Value::Array),
        Value::Object(map) => {
            let mut out = serde_json::Map::with_capacity(map.len());
            for (key, item) in map {
                out.insert(key.clone(), resolve_env_vars_with(item, env)?);
            }
            Ok(Value::Object(out))
        }
        other => Ok(other.clone()),
    }
}

fn substitute(s: &str, env: &HashMap<String, String>) -> Result<String> {
    let mut out = String::with_capacity(s.len());
    let mut last = 0;
    for caps in ENV_VAR_PATTERN.captures_iter(s) {
        let matched = caps.get(0).expect("capture group 0 always present");
        let name = &caps[1];
        let value = env
            .get(name)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| MissingEnvVar(name.to_string()))?;
        out.push_str(&s[last..matched.start()]);
        out.push_str(value);
        last = matched.end();
    }
    out.push_str(&s[last..]);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn substitutes_whole_value() {
        let value = json!({ "gemini": { "apiKey": "${GEMINI_API_KEY}" } });
        let resolved =
            resolve_env_vars_with(&value, &env(&[("GEMINI_API_KEY", "sk-test")])).unwrap();
        assert_eq!(resolved["gemini"]["apiKey"], "sk-test");
    }

    #[test]
    fn substitutes_inline_references() {
        let value = json!("https://${API_HOST}/v1beta");
        let resolved = resolve_env_vars_with(&value, &env(&[("API_HOST", "example.com")])).unwrap();
        assert_eq!(resolved, "https://example.com/v1beta");
    }

    #[test]
    fn missing_var_is_an_error() {
        let value = json!("${NOT_SET_ANYWHERE}");
        let err = resolve_env_vars_with(&value, &env(&[])).unwrap_err();
        assert!(err.to_string().contains("NOT_SET_ANYWHERE"));
    }

    #[test]
    fn empty_var_counts_as_missing() {
        let value = json!("${EMPTY_VAR}");
        assert!(resolve_env_vars_with(&value, &env(&[("EMPTY_VAR", "")])).is_err());
    }

    #[test]
    fn lowercase_names_are_left_alone() {
        let value = json!("${not_a_var}");
        let resolved = resolve_env_vars_with(&value, &env(&[])).unwrap();
        assert_eq!(resolved, "${not_a_var}");
    }

    #[test]
    fn non_string_leaves_untouched() {
        let value = json!({ "server": { "port": 8080, "tls": false } });
        let resolved = resolve_env_vars_with(&value, &env(&[])).unwrap();
        assert_eq!(resolved, value);
    }
}
