//! Configuration for the Voyage AI client

use serde::Deserialize;
use secrecy::{ExposeSecret, Secret};
use std::path::Path;
use std::time::Duration;

pub mod loader;
pub mod validation;

/// Production API root
pub const DEFAULT_BASE_URL: &str = "https://api.voyageai.com/v1";

/// Environment variable the API key falls back to
pub const API_KEY_ENV: &str = "VOYAGE_API_KEY";

/// Client configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// API key (secured). Falls back to `VOYAGE_API_KEY` when unset.
    #[serde(default, deserialize_with = "deserialize_optional_secret")]
    pub api_key: Option<Secret<String>>,

    /// API root, overridable for testing and mocking
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-attempt timeout in milliseconds. Unset or 0 means no timeout.
    #[serde(default)]
    pub timeout_ms: Option<u64>,

    /// Maximum attempts per call. 0 means a single attempt.
    #[serde(default)]
    pub max_retries: u32,

    /// First retry delay in milliseconds, doubled per attempt. 0 disables the delay.
    #[serde(default = "default_backoff_base")]
    pub backoff_base_ms: u64,

    /// Upper bound for the retry delay in milliseconds
    #[serde(default = "default_backoff_max")]
    pub backoff_max_ms: u64,

    /// Retry connect and timeout failures as well as retryable statuses
    #[serde(default)]
    pub retry_transport_errors: bool,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_backoff_base() -> u64 {
    100
}

fn default_backoff_max() -> u64 {
    30_000
}

/// Whole milliseconds, rounded up so a non-zero duration never becomes 0
fn ceil_millis(duration: Duration) -> u64 {
    let millis = duration.as_millis() as u64;
    if duration > Duration::from_millis(millis) {
        millis + 1
    } else {
        millis
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            timeout_ms: None,
            max_retries: 0,
            backoff_base_ms: default_backoff_base(),
            backoff_max_ms: default_backoff_max(),
            retry_transport_errors: false,
        }
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(Secret::new(key.into()));
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_ms = Some(ceil_millis(timeout));
        self
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_backoff(mut self, base: Duration, max: Duration) -> Self {
        self.backoff_base_ms = ceil_millis(base);
        self.backoff_max_ms = ceil_millis(max);
        self
    }

    pub fn with_retry_transport_errors(mut self, enabled: bool) -> Self {
        self.retry_transport_errors = enabled;
        self
    }

    /// Load configuration from a file, with `VOYAGE_*` environment overrides
    pub fn from_file<P: AsRef<Path>>(path: P) -> crate::error::Result<Self> {
        let config = loader::load_config(path)?;
        validation::validate_config(&config)?;
        Ok(config)
    }

    /// Load configuration from `VOYAGE_*` environment variables (and `.env`)
    pub fn from_env() -> crate::error::Result<Self> {
        let config = loader::load_config_from_env()?;
        validation::validate_config(&config)?;
        Ok(config)
    }

    /// Validate this configuration
    pub fn validate(&self) -> crate::error::Result<()> {
        validation::validate_config(self)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms
            .filter(|ms| *ms > 0)
            .map(Duration::from_millis)
    }

    /// The configured key, or `VOYAGE_API_KEY` when none is set
    pub fn resolve_api_key(&self) -> Option<Secret<String>> {
        match &self.api_key {
            Some(key) if !key.expose_secret().is_empty() => Some(key.clone()),
            _ => std::env::var(API_KEY_ENV)
                .ok()
                .filter(|k| !k.is_empty())
                .map(Secret::new),
        }
    }
}

/// Custom deserializer for Option<Secret<String>>
fn deserialize_optional_secret<'de, D>(deserializer: D) -> Result<Option<Secret<String>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.map(Secret::new))
}
