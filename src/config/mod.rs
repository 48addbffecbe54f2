//! Configuration and credential management for adlens

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{ConfigError, Result};

/// Env var consulted when `fb_access_token` is absent from the config file.
const ACCESS_TOKEN_ENV: &str = "FB_ACCESS_TOKEN";

/// Env var consulted when `ad_account_id` is absent from the config file.
const AD_ACCOUNT_ID_ENV: &str = "AD_ACCOUNT_ID";

/// Application configuration, stored as YAML under `~/.adlens/`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Facebook Marketing API access token
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fb_access_token: Option<String>,

    /// Ad account ID (e.g. `act_1234567890`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ad_account_id: Option<String>,
}

/// Credentials resolved once at startup and passed by reference thereafter.
///
/// Immutable for the process lifetime; absence of either value is fatal
/// before any network call is made.
#[derive(Debug, Clone)]
pub struct Credentials {
    /// Facebook Marketing API access token
    pub access_token: String,

    /// Ad account ID
    pub ad_account_id: String,
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".adlens").join("config.yaml"))
    }

    /// Resolve the config path from an optional override
    pub fn resolve_path(path: Option<&str>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(PathBuf::from(p)),
            None => Self::default_path(),
        }
    }

    /// Load configuration from an optional path override.
    ///
    /// A missing file is not an error here: credentials may still arrive
    /// through the environment fallback.
    pub fn load(path: Option<&str>) -> Result<Self> {
        let path = Self::resolve_path(path)?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;

        Ok(config)
    }

    /// Save configuration to an optional path override
    pub fn save(&self, path: Option<&str>) -> Result<()> {
        let path = Self::resolve_path(path)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents =
            serde_yaml::to_string(self).map_err(|e| ConfigError::SaveError(e.to_string()))?;

        std::fs::write(&path, contents)?;

        // Credentials live in this file; keep it owner-readable only
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(&path)?.permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(&path, perms)?;
        }

        Ok(())
    }

    /// Resolve credentials from the config file with environment fallback.
    ///
    /// Fallback checks the conventional uppercase env name first, then the
    /// literal config-file key. Missing either credential after fallback is
    /// a fatal startup condition.
    pub fn credentials(&self) -> Result<Credentials> {
        self.resolve_credentials(|name| std::env::var(name).ok())
    }

    fn resolve_credentials<F>(&self, lookup: F) -> Result<Credentials>
    where
        F: Fn(&str) -> Option<String>,
    {
        let access_token = self
            .fb_access_token
            .clone()
            .or_else(|| lookup(ACCESS_TOKEN_ENV))
            .or_else(|| lookup("fb_access_token"))
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingCredential(
                "fb_access_token",
                ACCESS_TOKEN_ENV,
            ))?;

        let ad_account_id = self
            .ad_account_id
            .clone()
            .or_else(|| lookup(AD_ACCOUNT_ID_ENV))
            .or_else(|| lookup("ad_account_id"))
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingCredential(
                "ad_account_id",
                AD_ACCOUNT_ID_ENV,
            ))?;

        Ok(Credentials {
            access_token,
            ad_account_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_default_config_is_empty() {
        let config = Config::default();
        assert!(config.fb_access_token.is_none());
        assert!(config.ad_account_id.is_none());
    }

    #[test]
    fn test_credentials_from_config_file_values() {
        let config = Config {
            fb_access_token: Some("tok-1".to_string()),
            ad_account_id: Some("act_42".to_string()),
        };

        let creds = config.resolve_credentials(|_| None).unwrap();
        assert_eq!(creds.access_token, "tok-1");
        assert_eq!(creds.ad_account_id, "act_42");
    }

    #[test]
    fn test_credentials_env_fallback() {
        let config = Config::default();

        let creds = config
            .resolve_credentials(|name| match name {
                "FB_ACCESS_TOKEN" => Some("env-tok".to_string()),
                "AD_ACCOUNT_ID" => Some("act_env".to_string()),
                _ => None,
            })
            .unwrap();

        assert_eq!(creds.access_token, "env-tok");
        assert_eq!(creds.ad_account_id, "act_env");
    }

    #[test]
    fn test_credentials_lowercase_env_fallback() {
        let config = Config::default();

        let creds = config
            .resolve_credentials(|name| match name {
                "fb_access_token" => Some("lower-tok".to_string()),
                "ad_account_id" => Some("act_lower".to_string()),
                _ => None,
            })
            .unwrap();

        assert_eq!(creds.access_token, "lower-tok");
        assert_eq!(creds.ad_account_id, "act_lower");
    }

    #[test]
    fn test_config_file_wins_over_env() {
        let config = Config {
            fb_access_token: Some("file-tok".to_string()),
            ad_account_id: Some("act_file".to_string()),
        };

        let creds = config
            .resolve_credentials(|_| Some("env-value".to_string()))
            .unwrap();

        assert_eq!(creds.access_token, "file-tok");
        assert_eq!(creds.ad_account_id, "act_file");
    }

    #[test]
    fn test_missing_access_token_is_fatal_and_named() {
        let config = Config {
            fb_access_token: None,
            ad_account_id: Some("act_42".to_string()),
        };

        let err = config.resolve_credentials(|_| None).unwrap_err();
        match err {
            Error::Config(ConfigError::MissingCredential(name, _)) => {
                assert_eq!(name, "fb_access_token");
            }
            other => panic!("Expected MissingCredential, got: {other:?}"),
        }
    }

    #[test]
    fn test_missing_ad_account_id_is_fatal_and_named() {
        let config = Config {
            fb_access_token: Some("tok".to_string()),
            ad_account_id: None,
        };

        let err = config.resolve_credentials(|_| None).unwrap_err();
        match err {
            Error::Config(ConfigError::MissingCredential(name, _)) => {
                assert_eq!(name, "ad_account_id");
            }
            other => panic!("Expected MissingCredential, got: {other:?}"),
        }
    }

    #[test]
    fn test_empty_credential_treated_as_missing() {
        let config = Config {
            fb_access_token: Some(String::new()),
            ad_account_id: Some("act_42".to_string()),
        };

        assert!(config.resolve_credentials(|_| None).is_err());
    }

    #[test]
    fn test_config_yaml_round_trip() {
        let config = Config {
            fb_access_token: Some("tok".to_string()),
            ad_account_id: Some("act_42".to_string()),
        };

        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed.fb_access_token.as_deref(), Some("tok"));
        assert_eq!(parsed.ad_account_id.as_deref(), Some("act_42"));
    }
}
