//! Nylas backend configuration.

use std::time::Duration;

/// Configuration for the Nylas calendar backend.
///
/// Authentication is an API key plus the grant id of the connected
/// account; both usually come from the environment.
#[derive(Debug, Clone)]
pub struct NylasConfig {
    /// API key for the Nylas application.
    pub api_key: String,

    /// Grant id of the connected calendar account.
    pub grant_id: String,

    /// Base URI of the Nylas API.
    ///
    /// Defaults to the US region; EU deployments override this.
    pub api_uri: String,

    /// Request timeout.
    pub timeout: Duration,
}

impl NylasConfig {
    /// Default API base, the US region.
    pub const DEFAULT_API_URI: &'static str = "https://api.us.nylas.com";

    /// Default timeout in seconds.
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

    /// Environment variable holding the API key.
    pub const API_KEY_ENV: &'static str = "NYLAS_API_KEY";

    /// Environment variable holding the grant id.
    pub const GRANT_ID_ENV: &'static str = "NYLAS_GRANT_ID";

    /// Environment variable overriding the API base URI.
    pub const API_URI_ENV: &'static str = "NYLAS_API_URI";

    /// Creates a configuration with the given credentials.
    pub fn new(api_key: impl Into<String>, grant_id: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            grant_id: grant_id.into(),
            api_uri: Self::DEFAULT_API_URI.to_string(),
            timeout: Duration::from_secs(Self::DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Reads the configuration from the environment.
    pub fn from_env() -> Result<Self, String> {
        let api_key = std::env::var(Self::API_KEY_ENV)
            .map_err(|_| format!("{} is not set", Self::API_KEY_ENV))?;
        let grant_id = std::env::var(Self::GRANT_ID_ENV)
            .map_err(|_| format!("{} is not set", Self::GRANT_ID_ENV))?;

        let mut config = Self::new(api_key, grant_id);
        if let Ok(api_uri) = std::env::var(Self::API_URI_ENV)
            && !api_uri.is_empty()
        {
            config.api_uri = api_uri;
        }
        Ok(config)
    }

    /// Sets the API base URI. A trailing slash is stripped.
    pub fn with_api_uri(mut self, api_uri: impl Into<String>) -> Self {
        let api_uri = api_uri.into();
        self.api_uri = api_uri.trim_end_matches('/').to_string();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.api_key.is_empty() {
            return Err("api_key is required".to_string());
        }
        if self.grant_id.is_empty() {
            return Err("grant_id is required".to_string());
        }
        if !self.api_uri.starts_with("http://") && !self.api_uri.starts_with("https://") {
            return Err(format!("api_uri must be an HTTP(S) URL: {}", self.api_uri));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = NylasConfig::new("key", "grant");
        assert_eq!(config.api_uri, NylasConfig::DEFAULT_API_URI);
        assert_eq!(
            config.timeout,
            Duration::from_secs(NylasConfig::DEFAULT_TIMEOUT_SECS)
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn config_builder_methods() {
        let config = NylasConfig::new("key", "grant")
            .with_api_uri("https://api.eu.nylas.com/")
            .with_timeout(Duration::from_secs(5));

        assert_eq!(config.api_uri, "https://api.eu.nylas.com");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn config_validation() {
        assert!(NylasConfig::new("", "grant").validate().is_err());
        assert!(NylasConfig::new("key", "").validate().is_err());

        let bad_uri = NylasConfig::new("key", "grant").with_api_uri("ftp://api.example.com");
        assert!(bad_uri.validate().is_err());
    }
}
