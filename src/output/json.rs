//! JSON output formatting

use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::redact::redact_value;

/// Wrapper for JSON output with metadata
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonOutput {
    /// The payload, redacted when masking is on
    pub data: Value,

    /// Metadata about the response
    pub meta: Metadata,
}

/// Metadata included in JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct Metadata {
    /// Timestamp of the response
    pub timestamp: String,

    /// CLI version
    pub version: String,

    /// Whether sensitive fields were masked in `data`
    pub masked: bool,
}

impl JsonOutput {
    /// Wrap a payload, applying the sensitive-field mask unless disabled
    pub fn new(payload: Value, hide_sensitive: bool) -> Self {
        let data = if hide_sensitive {
            redact_value(payload)
        } else {
            payload
        };

        Self {
            data,
            meta: Metadata {
                timestamp: Utc::now().to_rfc3339(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                masked: hide_sensitive,
            },
        }
    }
}

/// Format a payload as pretty-printed, optionally redacted JSON
pub fn format_payload(payload: Value, hide_sensitive: bool) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonOutput::new(payload, hide_sensitive))
}
