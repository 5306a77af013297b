use std::time::Duration;

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};

/// Default Zyra API base URL
pub const ZYRA_DEFAULT_BASE: &str = "https://api.zyra.com/api";
/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for the Zyra client
///
/// Debug output automatically redacts `api_key` via [`SecretString`].
#[derive(Clone, Debug)]
pub struct ZyraConfig {
    api_base: String,
    api_key: Option<SecretString>,
    timeout: Duration,
}

impl Default for ZyraConfig {
    fn default() -> Self {
        let api_key = std::env::var("ZYRA_API_KEY")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(SecretString::from);

        let api_base = std::env::var("ZYRA_BASE_URL")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| ZYRA_DEFAULT_BASE.into());

        Self {
            api_base,
            api_key,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ZyraConfig {
    /// Creates a new configuration with default settings
    ///
    /// Attempts to read from environment variables:
    /// - `ZYRA_API_KEY` for bearer token authentication
    /// - `ZYRA_BASE_URL` for custom API base URL (defaults to `https://api.zyra.com/api`)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API base URL
    #[must_use]
    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into();
        self
    }

    /// Sets the API key used as the bearer credential
    #[must_use]
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(SecretString::from(key.into()));
        self
    }

    /// Sets the per-request timeout
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the configured API base URL
    #[must_use]
    pub fn api_base(&self) -> &str {
        &self.api_base
    }
}

/// Configuration trait for the Zyra client
///
/// Implement this trait to provide custom authentication and API configuration.
pub trait Config: Send + Sync {
    /// Returns HTTP headers to include in requests
    ///
    /// # Errors
    ///
    /// Returns an error if header values contain invalid characters.
    fn headers(&self) -> Result<HeaderMap, crate::error::ZyraError>;

    /// Constructs the full URL for an API endpoint
    fn url(&self, path: &str) -> String;

    /// Returns query parameters to include in every request
    fn query(&self) -> Vec<(&str, &str)>;

    /// Returns the per-request timeout applied when the client is built
    fn timeout(&self) -> Duration;

    /// Validates that authentication credentials are present.
    ///
    /// # Errors
    ///
    /// Returns an error if authentication is not properly configured.
    fn validate_auth(&self) -> Result<(), crate::error::ZyraError>;
}

impl Config for ZyraConfig {
    fn headers(&self) -> Result<HeaderMap, crate::error::ZyraError> {
        use crate::error::ZyraError;

        let mut h = HeaderMap::new();

        if let Some(secret) = &self.api_key {
            let key = secret.expose_secret().trim();
            if !key.is_empty() {
                let v = format!("Bearer {key}");
                h.insert(
                    AUTHORIZATION,
                    HeaderValue::from_str(&v)
                        .map_err(|_| ZyraError::Config("Invalid bearer token value".into()))?,
                );
            }
        }

        Ok(h)
    }

    fn url(&self, path: &str) -> String {
        let base = self.api_base.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }

    fn query(&self) -> Vec<(&str, &str)> {
        vec![]
    }

    fn timeout(&self) -> Duration {
        self.timeout
    }

    fn validate_auth(&self) -> Result<(), crate::error::ZyraError> {
        match &self.api_key {
            Some(secret) if !secret.expose_secret().trim().is_empty() => Ok(()),
            _ => Err(crate::error::ZyraError::Config(
                "Missing Zyra credentials: set ZYRA_API_KEY environment variable".into(),
            )),
        }
    }
}
