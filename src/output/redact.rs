//! Sensitive-field masking rules

use serde_json::Value;

/// Placeholder substituted for sensitive values before display
pub const MASK: &str = "***HIDDEN***";

/// A field is sensitive when any of these tokens is a substring of its
/// lowercased name. The `id` token is deliberately coarse and also catches
/// object identifiers; paging data is rendered unmasked through a separate
/// call instead of narrowing the rule.
const SENSITIVE_TOKENS: &[&str] = &[
    "token",
    "secret",
    "key",
    "password",
    "auth",
    "id",
    "account_id",
    "user_id",
    "email",
    "phone",
    "credit_card",
    "payment",
    "billing",
    "personal",
    "private",
];

/// Narrower token set used by the fallback summary path
const AUTH_TOKENS: &[&str] = &["token", "secret", "key", "id", "auth"];

/// True when the field name matches the sensitive-field rule
pub fn is_sensitive(name: &str) -> bool {
    let lowered = name.to_lowercase();
    SENSITIVE_TOKENS.iter().any(|t| lowered.contains(t))
}

/// True when the field name matches the auth-related subset
pub fn is_auth_related(name: &str) -> bool {
    let lowered = name.to_lowercase();
    AUTH_TOKENS.iter().any(|t| lowered.contains(t))
}

/// Walk a JSON tree and replace every value stored under a sensitive key
/// with the mask literal. Used for `--format json` output so the JSON path
/// upholds the same invariant as the tables.
pub fn redact_value(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut redacted = serde_json::Map::with_capacity(map.len());
            for (key, val) in map {
                if is_sensitive(&key) {
                    redacted.insert(key, Value::String(MASK.to_string()));
                } else {
                    redacted.insert(key, redact_value(val));
                }
            }
            Value::Object(redacted)
        }
        Value::Array(items) => Value::Array(items.into_iter().map(redact_value).collect()),
        other => other,
    }
}
