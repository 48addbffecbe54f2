//! Facebook Marketing Graph API client

use std::fmt;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use crate::config::Credentials;
use crate::error::FetchError;

pub mod graph;

pub use graph::GraphClient;

/// Outcome of one Graph API call: the decoded payload or a failure signal.
pub type FetchResult = std::result::Result<Value, FetchError>;

/// Graph API client trait
#[async_trait]
pub trait GraphApi: Send + Sync {
    /// Perform exactly one GET against `path` with `params` as the query
    /// string and decode the JSON body.
    async fn fetch(&self, path: &str, params: &[(&str, &str)]) -> FetchResult;

    /// List the ad accounts visible to the access token
    async fn list_ad_accounts(&self, creds: &Credentials) -> FetchResult;

    /// Fetch name/status/currency/timezone metadata for the ad account
    async fn account_metadata(&self, creds: &Credentials) -> FetchResult;
}

/// Redacted summary of an API error response.
///
/// Extracted defensively from the decoded body: the `error` object's
/// `type`/`code`/`message` plus the top-level key set, never the body
/// itself. Safe to display and to log.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorSummary {
    pub error_type: String,
    pub error_code: String,
    pub error_message: String,
    pub response_keys: Vec<String>,
}

impl ErrorSummary {
    /// Build a summary from any decoded payload shape
    pub fn from_payload(payload: &Value) -> Self {
        let error = payload.get("error");

        let error_type = error
            .and_then(|e| e.get("type"))
            .and_then(Value::as_str)
            .unwrap_or("Unknown")
            .to_string();

        let error_code = error
            .and_then(|e| e.get("code"))
            .map(|code| match code {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .unwrap_or_else(|| "Unknown".to_string());

        let error_message = error
            .and_then(|e| e.get("message"))
            .and_then(Value::as_str)
            .unwrap_or("Unknown error")
            .to_string();

        let response_keys = payload
            .as_object()
            .map(|obj| obj.keys().cloned().collect())
            .unwrap_or_default();

        Self {
            error_type,
            error_code,
            error_message,
            response_keys,
        }
    }
}

impl fmt::Display for ErrorSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  error_type    = {}", self.error_type)?;
        writeln!(f, "  error_code    = {}", self.error_code)?;
        writeln!(f, "  error_message = {}", self.error_message)?;
        write!(f, "  response_keys = {:?}", self.response_keys)
    }
}
