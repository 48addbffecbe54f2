//! Graph API client implementation

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client as HttpClient;
use serde_json::Value;

use super::{ErrorSummary, FetchResult, GraphApi};
use crate::config::Credentials;
use crate::error::FetchError;

/// Graph API base URL
const GRAPH_BASE_URL: &str = "https://graph.facebook.com/v19.0";

/// Metadata fields requested for an ad account
const ACCOUNT_FIELDS: &str = "name,account_status,currency,timezone_name";

/// Facebook Graph API client.
///
/// One GET per call, no retries, no shared state beyond the connection
/// pool. Payloads are never logged; debug lines carry the path and status
/// only, since the query string holds the access token.
pub struct GraphClient {
    http: HttpClient,
    base_url: String,
}

impl GraphClient {
    /// Create a client against the production Graph API
    pub fn new() -> Result<Self, FetchError> {
        Self::with_host(None)
    }

    /// Create a client with an optional base URL override (used by tests
    /// to point at a local mock server)
    pub fn with_host(host: Option<String>) -> Result<Self, FetchError> {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: host.unwrap_or_else(|| GRAPH_BASE_URL.to_string()),
        })
    }
}

#[async_trait]
impl GraphApi for GraphClient {
    async fn fetch(&self, path: &str, params: &[(&str, &str)]) -> FetchResult {
        let url = format!("{}/{}", self.base_url, path);
        debug!("GET {}/{}", self.base_url, path);

        let response = self
            .http
            .get(&url)
            .query(params)
            .send()
            .await
            .map_err(FetchError::from)?;

        let status = response.status();
        debug!("{} -> {}", path, status);

        let body = response.text().await.map_err(FetchError::from)?;

        if !status.is_success() {
            // Summarize the error body at the boundary; the caller never
            // sees the body itself.
            let summary = match serde_json::from_str::<Value>(&body) {
                Ok(payload) => ErrorSummary::from_payload(&payload),
                Err(_) => ErrorSummary::from_payload(&Value::Null),
            };
            return Err(FetchError::Http {
                status: status.as_u16(),
                summary,
            });
        }

        serde_json::from_str(&body).map_err(|e| FetchError::InvalidJson(e.to_string()))
    }

    async fn list_ad_accounts(&self, creds: &Credentials) -> FetchResult {
        self.fetch(
            "me/adaccounts",
            &[("access_token", creds.access_token.as_str())],
        )
        .await
    }

    async fn account_metadata(&self, creds: &Credentials) -> FetchResult {
        let path = format!("{}/", creds.ad_account_id);
        self.fetch(
            &path,
            &[
                ("fields", ACCOUNT_FIELDS),
                ("access_token", creds.access_token.as_str()),
            ],
        )
        .await
    }
}
