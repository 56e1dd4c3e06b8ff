//! Configuration for cogsamples
//!
//! Settings are layered: built-in defaults, then `~/.cogsamples/config.json`
//! when it exists, then `COGSAMPLES_*` environment variables. A `.env` file is
//! picked up by `main` through `dotenvy` before loading.
//!
//! ```json
//! {
//!     "endpoint": "https://westus.api.cognitive.microsoft.com",
//!     "subscription_key": "0123456789abcdef",
//!     "reveal_credentials": false,
//!     "request_timeout_secs": 30
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{HarnessError, Result};

const ENV_ENDPOINT: &str = "COGSAMPLES_ENDPOINT";
const ENV_SUBSCRIPTION_KEY: &str = "COGSAMPLES_SUBSCRIPTION_KEY";
const ENV_REVEAL_CREDENTIALS: &str = "COGSAMPLES_REVEAL_CREDENTIALS";
const ENV_REQUEST_TIMEOUT: &str = "COGSAMPLES_REQUEST_TIMEOUT_SECS";

/// Default regional endpoint for the bundled samples.
pub const DEFAULT_ENDPOINT: &str = "https://westus.api.cognitive.microsoft.com";

static CONFIG: OnceCell<Config> = OnceCell::new();

/// Runner configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL every sample request is sent to.
    pub endpoint: String,

    /// Key used when the user answers the key prompt with an empty line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_key: Option<String>,

    /// Print the full key in the confirmation line instead of masking it.
    pub reveal_credentials: bool,

    /// Per-request timeout for sample HTTP calls.
    pub request_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            subscription_key: None,
            reveal_credentials: false,
            request_timeout_secs: 30,
        }
    }
}

impl Config {
    /// Configuration directory (`~/.cogsamples`).
    pub fn dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".cogsamples")
    }

    /// Configuration file path (`~/.cogsamples/config.json`).
    pub fn path() -> PathBuf {
        Self::dir().join("config.json")
    }

    /// Load from the default path, then apply environment overrides.
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(&Self::path())?;
        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Load from a specific file. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            HarnessError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let config = serde_json::from_str(&content)?;
        debug!(path = %path.display(), "Loaded config file");
        Ok(config)
    }

    /// Apply `COGSAMPLES_*` overrides looked up through `lookup`.
    ///
    /// Empty values are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(endpoint) = get(ENV_ENDPOINT) {
            self.endpoint = endpoint;
        }
        if let Some(key) = get(ENV_SUBSCRIPTION_KEY) {
            self.subscription_key = Some(key);
        }
        if let Some(reveal) = get(ENV_REVEAL_CREDENTIALS) {
            self.reveal_credentials = parse_bool(ENV_REVEAL_CREDENTIALS, &reveal)?;
        }
        if let Some(timeout) = get(ENV_REQUEST_TIMEOUT) {
            self.request_timeout_secs = timeout.trim().parse().map_err(|_| {
                HarnessError::Config(format!(
                    "{} must be a whole number of seconds, got '{}'",
                    ENV_REQUEST_TIMEOUT, timeout
                ))
            })?;
        }

        Ok(())
    }

    /// The endpoint without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.endpoint.trim_end_matches('/')
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(HarnessError::Config(format!(
            "{} must be true or false, got '{}'",
            key, value
        ))),
    }
}

/// Make `config` the process-wide configuration.
///
/// Only the first call wins; later calls return the installed value.
pub fn install(config: Config) -> &'static Config {
    CONFIG.get_or_init(|| config)
}

/// The process-wide configuration, or the defaults if none was installed.
pub fn current() -> &'static Config {
    CONFIG.get_or_init(Config::default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert!(config.subscription_key.is_none());
        assert!(!config.reveal_credentials);
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn test_load_from_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_from_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{"endpoint": "https://eastus.api.cognitive.microsoft.com/", "unknown": 1}"#,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.endpoint, "https://eastus.api.cognitive.microsoft.com/");
        assert_eq!(config.base_url(), "https://eastus.api.cognitive.microsoft.com");
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn test_load_from_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, HarnessError::Json(_)));
    }

    #[test]
    fn test_env_overrides() {
        let mut config = Config::default();
        config
            .apply_overrides(lookup(&[
                (ENV_ENDPOINT, "http://localhost:8080"),
                (ENV_SUBSCRIPTION_KEY, "abc123"),
                (ENV_REVEAL_CREDENTIALS, "TRUE"),
                (ENV_REQUEST_TIMEOUT, "5"),
            ]))
            .unwrap();

        assert_eq!(config.endpoint, "http://localhost:8080");
        assert_eq!(config.subscription_key.as_deref(), Some("abc123"));
        assert!(config.reveal_credentials);
        assert_eq!(config.request_timeout_secs, 5);
    }

    #[test]
    fn test_empty_env_values_ignored() {
        let mut config = Config::default();
        config
            .apply_overrides(lookup(&[(ENV_ENDPOINT, ""), (ENV_SUBSCRIPTION_KEY, "  ")]))
            .unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_invalid_env_values_rejected() {
        let mut config = Config::default();
        let err = config
            .apply_overrides(lookup(&[(ENV_REQUEST_TIMEOUT, "soon")]))
            .unwrap_err();
        assert!(err.to_string().contains(ENV_REQUEST_TIMEOUT));

        let err = config
            .apply_overrides(lookup(&[(ENV_REVEAL_CREDENTIALS, "maybe")]))
            .unwrap_err();
        assert!(matches!(err, HarnessError::Config(_)));
    }

    #[test]
    fn test_path_under_config_dir() {
        assert!(Config::path().ends_with(".cogsamples/config.json"));
    }
}
