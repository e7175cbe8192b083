//! Config redaction: produce safe-to-share config snapshots by masking
//! sensitive fields before logging or display.

use serde_json::Value;

/// Key names whose string values are secrets.
static SENSITIVE_KEYS: &[&str] = &["apiKey", "api_key", "apikey", "token", "secret", "password"];

/// Redact a config JSON value, masking all sensitive fields.
///
/// The resulting value is safe to log or print from `check-config`.
pub fn redact(value: &Value) -> Value {
    redact_recursive(value, "")
}

fn is_sensitive_key(key: &str) -> bool {
    SENSITIVE_KEYS.iter().any(|k| k.eq_ignore_ascii_case(key))
}

fn redact_string(s: &str, key: &str) -> Value {
    if is_sensitive_key(key) && !s.is_empty() {
        // Preserve a short prefix as a which-key-is-this hint. Counted in
        // chars, not bytes, so multibyte secrets cannot split a boundary.
        let hint = if s.chars().count() > 4 {
            format!("{}***", s.chars().take(4).collect::<String>())
        } else {
            "***".to_string()
        };
        return Value::String(hint);
    }
    Value::String(s.to_string())
}

fn redact_recursive(value: &Value, key: &str) -> Value {
    match value {
        Value::String(s) => redact_string(s, key),
        Value::Array(items) => {
            Value::Array(items.iter().map(|item| redact_recursive(item, key)).collect())
        }
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), redact_recursive(v, k)))
                .collect(),
        ),
        other => other.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn masks_api_key_with_prefix_hint() {
        let value = json!({ "gemini": { "apiKey": "sk-abcdef123456" } });
        let redacted = redact(&value);
        assert_eq!(redacted["gemini"]["apiKey"], "sk-a***");
    }

    #[test]
    fn short_secrets_fully_masked() {
        let value = json!({ "token": "abc" });
        assert_eq!(redact(&value)["token"], "***");
    }

    #[test]
    fn empty_secret_stays_empty() {
        let value = json!({ "apiKey": "" });
        assert_eq!(redact(&value)["apiKey"], "");
    }

    #[test]
    fn multibyte_secret_is_masked_without_panicking() {
        let value = json!({ "apiKey": "秘密の鍵です" });
        assert_eq!(redact(&value)["apiKey"], "秘密の鍵***");
    }

    #[test]
    fn non_sensitive_fields_untouched() {
        let value = json!({ "server": { "host": "0.0.0.0", "port": 8080 } });
        assert_eq!(redact(&value), value);
    }
}
