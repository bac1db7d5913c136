//! Top-level application configuration.
//!
//! Configuration is stored in `<root>/config.yaml` and includes:
//! - The ticket service URL
//! - The request timeout for the one-shot fetch

use std::env;
use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{Result, TrellisError};
use crate::paths::config_path;
use crate::utils::{ensure_parent_dir, format_relative_path};

/// Environment variable that overrides the configured API URL
pub const API_URL_ENV_VAR: &str = "TRELLIS_API_URL";

pub const DEFAULT_API_URL: &str = "https://api.quicksell.co/v1/internal/frontend-assignment";

/// Keys accepted by `trellis config get/set`
pub const CONFIG_KEYS: &[&str] = &["api_url", "timeout"];

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Endpoint returning `{ tickets, users }`
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_timeout() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            timeout: default_timeout(),
        }
    }
}

impl Config {
    /// Load configuration from the default location, or return default if not found
    pub fn load() -> Result<Self> {
        Self::load_from(&config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            TrellisError::Io(std::io::Error::new(
                e.kind(),
                format!(
                    "Failed to read config at {}: {}",
                    format_relative_path(path),
                    e
                ),
            ))
        })?;
        if content.trim().is_empty() {
            return Ok(Config::default());
        }
        let config: Config = serde_yaml_ng::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        ensure_parent_dir(path)?;
        let content = serde_yaml_ng::to_string(self)?;
        fs::write(path, content).map_err(|e| {
            TrellisError::Io(std::io::Error::new(
                e.kind(),
                format!(
                    "Failed to write config at {}: {}",
                    format_relative_path(path),
                    e
                ),
            ))
        })?;
        Ok(())
    }

    /// Get the API URL from the environment or the config file
    pub fn api_url(&self) -> String {
        if let Ok(url) = env::var(API_URL_ENV_VAR)
            && !url.is_empty()
        {
            return url;
        }
        self.api_url.clone()
    }

    /// Get the request timeout duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    /// Read a config value by key, as stored (ignores env overrides)
    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "api_url" => Ok(self.api_url.clone()),
            "timeout" => Ok(self.timeout.to_string()),
            _ => Err(TrellisError::InvalidConfigKey(key.to_string())),
        }
    }

    /// Set a config value by key, validating it first
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "api_url" => {
                self.api_url = validate_api_url(value)?;
                Ok(())
            }
            "timeout" => {
                let seconds: u64 = value.trim().parse().map_err(|_| {
                    TrellisError::Config(format!(
                        "timeout must be a whole number of seconds, got '{value}'"
                    ))
                })?;
                if seconds == 0 {
                    return Err(TrellisError::Config(
                        "timeout must be at least 1 second".to_string(),
                    ));
                }
                self.timeout = seconds;
                Ok(())
            }
            _ => Err(TrellisError::InvalidConfigKey(key.to_string())),
        }
    }
}

/// Check that `value` is an absolute http(s) URL
pub fn validate_api_url(value: &str) -> Result<String> {
    let url = Url::parse(value.trim())
        .map_err(|e| TrellisError::Config(format!("invalid api_url '{value}': {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(url.to_string()),
        other => Err(TrellisError::Config(format!(
            "api_url must use http or https, got '{other}'"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.timeout, 30);
        assert_eq!(config.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_config_partial_yaml_uses_defaults() {
        let config: Config = serde_yaml_ng::from_str("timeout: 5\n").unwrap();
        assert_eq!(config.timeout, 5);
        assert_eq!(config.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_config_missing_file_is_default() {
        let temp = TempDir::new().unwrap();
        let config = Config::load_from(&temp.path().join("config.yaml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_config_save_and_load() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("config.yaml");

        let mut config = Config::default();
        config.set("api_url", "http://localhost:8080/board").unwrap();
        config.set("timeout", "10").unwrap();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.api_url, "http://localhost:8080/board");
        assert_eq!(loaded.timeout, 10);
    }

    #[test]
    fn test_config_invalid_yaml_is_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yaml");
        fs::write(&path, "timeout: [not a number").unwrap();
        assert!(matches!(
            Config::load_from(&path),
            Err(TrellisError::YamlParse(_))
        ));
    }

    #[test]
    fn test_config_set_rejects_bad_values() {
        let mut config = Config::default();
        assert!(config.set("api_url", "not a url").is_err());
        assert!(config.set("api_url", "ftp://example.com/board").is_err());
        assert!(config.set("timeout", "soon").is_err());
        assert!(config.set("timeout", "0").is_err());
        assert!(matches!(
            config.set("color", "always"),
            Err(TrellisError::InvalidConfigKey(_))
        ));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_config_get() {
        let config = Config::default();
        assert_eq!(config.get("timeout").unwrap(), "30");
        assert_eq!(config.get("api_url").unwrap(), DEFAULT_API_URL);
        assert!(config.get("nope").is_err());
    }

    #[test]
    #[serial]
    fn test_api_url_env_override() {
        let config = Config::default();
        // SAFETY: We use #[serial] to ensure single-threaded access
        unsafe { env::set_var(API_URL_ENV_VAR, "http://override.test/data") };
        assert_eq!(config.api_url(), "http://override.test/data");
        unsafe { env::remove_var(API_URL_ENV_VAR) };
        assert_eq!(config.api_url(), DEFAULT_API_URL);
    }
}
