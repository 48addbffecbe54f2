//! Error types for the adlens CLI

use thiserror::Error;

use crate::client::ErrorSummary;

/// Result type alias for adlens operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Interactive prompt error: {0}")]
    Dialoguer(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Dialoguer(err.to_string())
    }
}

/// Outcome of a failed Graph API fetch.
///
/// A non-2xx response carries only the redacted [`ErrorSummary`] extracted
/// at the fetch boundary; the raw body never crosses it.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request failed (HTTP {status})\n{summary}")]
    Http { status: u16, summary: ErrorSummary },

    #[error("Response was not valid JSON: {0}")]
    InvalidJson(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            FetchError::Network("Failed to connect to the Graph API".to_string())
        } else {
            FetchError::Network(err.to_string())
        }
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error(
        "Missing credential `{0}`. Add it to the config file (run `adlens init`) \
         or export the `{1}` environment variable."
    )]
    MissingCredential(&'static str, &'static str),
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
