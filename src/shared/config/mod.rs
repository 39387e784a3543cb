//! Client configuration module
//!
//! Provides the base-URL and timeout configuration for the gateway.

use std::time::Duration;
use thiserror::Error;

/// Default server URL
const DEFAULT_API_URL: &str = "http://127.0.0.1:3000";

/// Default request timeout applied to every gateway call
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    base_url: String,
    timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        let base_url = match std::env::var("HOMESPHERE_API_URL") {
            Ok(url) if reqwest::Url::parse(&url).is_ok() => url,
            Ok(url) => {
                tracing::warn!("ignoring malformed HOMESPHERE_API_URL {:?}", url);
                DEFAULT_API_URL.to_string()
            }
            Err(_) => DEFAULT_API_URL.to_string(),
        };
        Self {
            base_url: trim_base(base_url),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new ClientConfigBuilder
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Get the full URL for an API endpoint
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

/// Builder for ClientConfig
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl ClientConfigBuilder {
    /// Set the server base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<ClientConfig, ConfigError> {
        let base_url = match self.base_url {
            Some(url) => {
                reqwest::Url::parse(&url).map_err(|_| ConfigError::InvalidUrl(url.clone()))?;
                trim_base(url)
            }
            None => ClientConfig::default().base_url,
        };
        Ok(ClientConfig {
            base_url,
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
        })
    }
}

fn trim_base(url: String) -> String {
    url.trim_end_matches('/').to_string()
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = ClientConfig::builder()
            .base_url("http://example.com:8080")
            .build()
            .unwrap();
        assert_eq!(config.base_url(), "http://example.com:8080");
        assert_eq!(config.timeout(), Duration::from_secs(20));
    }

    #[test]
    fn test_api_url() {
        let config = ClientConfig::builder()
            .base_url("http://example.com/")
            .build()
            .unwrap();
        let url = config.api_url("/api/auth/login");
        assert_eq!(url, "http://example.com/api/auth/login");
    }

    #[test]
    fn test_invalid_url_rejected() {
        let result = ClientConfig::builder().base_url("not a url").build();
        assert!(matches!(result, Err(ConfigError::InvalidUrl(_))));
    }

    // Single test for both env cases; parallel tests must not race on the
    // variable.
    #[test]
    fn test_env_override_validated() {
        std::env::set_var("HOMESPHERE_API_URL", "http://env.example.com:9000");
        let config = ClientConfig::default();
        assert_eq!(config.base_url(), "http://env.example.com:9000");

        std::env::set_var("HOMESPHERE_API_URL", "not a url at all");
        let config = ClientConfig::default();
        assert_eq!(config.base_url(), "http://127.0.0.1:3000");

        std::env::remove_var("HOMESPHERE_API_URL");
        let config = ClientConfig::default();
        assert_eq!(config.base_url(), "http://127.0.0.1:3000");
    }

    #[test]
    fn test_custom_timeout() {
        let config = ClientConfig::builder()
            .base_url("http://example.com")
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();
        assert_eq!(config.timeout(), Duration::from_secs(5));
    }
}
