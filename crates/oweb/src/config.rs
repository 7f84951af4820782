//! Runtime configuration, resolved once at startup.
//!
//! Resolution order for each value:
//! 1. Command-line flag
//! 2. Environment variable (after `.env` loading)
//! 3. Built-in default
//!
//! The API key has no flag and no default: it must come from the
//! environment.

use std::time::Duration;

use oweb_client::{DEFAULT_BASE_URL, OwebClient};

/// Environment variable holding the service root.
pub const BASE_URL_VAR: &str = "BASE_URL";

/// Environment variable holding the API key.
pub const API_KEY_VAR: &str = "OPEN_WEBUI_API_KEY";

/// Environment variable holding the request timeout in seconds.
pub const TIMEOUT_VAR: &str = "OWEB_TIMEOUT";

/// Errors raised while resolving configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The API key is absent or empty.
    #[error(
        "API key not found. Please set the OPEN_WEBUI_API_KEY environment variable or add it to a .env file"
    )]
    MissingApiKey,

    /// The timeout is not a whole number of seconds.
    #[error("invalid OWEB_TIMEOUT value '{0}': expected a number of seconds")]
    InvalidTimeout(String),
}

/// Resolved configuration for one run.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    /// Service root.
    pub base_url: String,
    /// Bearer token.
    pub api_key: String,
    /// Request timeout; `None` leaves the HTTP client's default.
    pub timeout: Option<Duration>,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Values supplied on the command line.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl Config {
    /// Resolve from the process environment.
    pub fn from_env(overrides: Overrides) -> Result<Self, ConfigError> {
        Self::resolve(overrides, |name| std::env::var(name).ok())
    }

    /// Resolve using `lookup` to read environment variables.
    pub fn resolve<F>(overrides: Overrides, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR)
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let base_url = overrides
            .base_url
            .or_else(|| lookup(BASE_URL_VAR))
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let timeout_secs = match overrides.timeout_secs {
            Some(secs) => Some(secs),
            None => match lookup(TIMEOUT_VAR) {
                Some(raw) if !raw.trim().is_empty() => Some(
                    raw.trim()
                        .parse::<u64>()
                        .map_err(|_| ConfigError::InvalidTimeout(raw.clone()))?,
                ),
                _ => None,
            },
        };

        Ok(Self {
            base_url,
            api_key,
            timeout: timeout_secs.map(Duration::from_secs),
        })
    }

    /// Build an API client from this configuration.
    pub fn client(&self) -> oweb_client::Result<OwebClient> {
        let mut builder = OwebClient::builder()
            .base_url(&self.base_url)
            .api_key(&self.api_key);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_missing_api_key() {
        let result = Config::resolve(Overrides::default(), env(&[]));
        assert!(matches!(result, Err(ConfigError::MissingApiKey)));
    }

    #[test]
    fn test_empty_api_key() {
        let result = Config::resolve(Overrides::default(), env(&[(API_KEY_VAR, "")]));
        assert!(matches!(result, Err(ConfigError::MissingApiKey)));
    }

    #[test]
    fn test_defaults() {
        let config = Config::resolve(Overrides::default(), env(&[(API_KEY_VAR, "sk-1")])).unwrap();
        assert_eq!(config.base_url, "http://localhost:3000/api");
        assert_eq!(config.api_key, "sk-1");
        assert_eq!(config.timeout, None);
    }

    #[test]
    fn test_env_base_url_and_timeout() {
        let config = Config::resolve(
            Overrides::default(),
            env(&[
                (API_KEY_VAR, "sk-1"),
                (BASE_URL_VAR, "https://webui.example.com/api"),
                (TIMEOUT_VAR, "30"),
            ]),
        )
        .unwrap();
        assert_eq!(config.base_url, "https://webui.example.com/api");
        assert_eq!(config.timeout, Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_flags_win_over_env() {
        let config = Config::resolve(
            Overrides {
                base_url: Some("http://flag:1/api".to_string()),
                timeout_secs: Some(5),
            },
            env(&[
                (API_KEY_VAR, "sk-1"),
                (BASE_URL_VAR, "http://env:2/api"),
                (TIMEOUT_VAR, "30"),
            ]),
        )
        .unwrap();
        assert_eq!(config.base_url, "http://flag:1/api");
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_invalid_timeout() {
        let result = Config::resolve(
            Overrides::default(),
            env(&[(API_KEY_VAR, "sk-1"), (TIMEOUT_VAR, "soon")]),
        );
        assert!(matches!(result, Err(ConfigError::InvalidTimeout(v)) if v == "soon"));
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = Config::resolve(Overrides::default(), env(&[(API_KEY_VAR, "sk-secret")]))
            .unwrap();
        assert!(!format!("{:?}", config).contains("sk-secret"));
    }

    #[test]
    fn test_client_from_config() {
        let config = Config::resolve(Overrides::default(), env(&[(API_KEY_VAR, "sk-1")])).unwrap();
        let client = config.client().unwrap();
        assert_eq!(client.base_url().as_str(), "http://localhost:3000/api/");
    }
}
