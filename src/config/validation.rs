//! Configuration validation

use super::ClientConfig;
use crate::error::{Result, VoyageError};

/// Validate client configuration
pub fn validate_config(config: &ClientConfig) -> Result<()> {
    if config.base_url.is_empty() {
        return Err(VoyageError::Config(
            "Base URL cannot be empty".to_string()
        ));
    }

    if !config.base_url.starts_with("http://") && !config.base_url.starts_with("https://") {
        return Err(VoyageError::Config(
            "Base URL must start with http:// or https://".to_string()
        ));
    }

    if config.backoff_max_ms < config.backoff_base_ms {
        return Err(VoyageError::Config(format!(
            "Backoff cap {}ms is below the base delay {}ms",
            config.backoff_max_ms, config.backoff_base_ms
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&ClientConfig::default()).is_ok());
    }

    #[test]
    fn test_rejects_bad_base_url() {
        let config = ClientConfig::new().with_base_url("");
        assert!(validate_config(&config).is_err());

        let config = ClientConfig::new().with_base_url("ftp://api.voyageai.com");
        assert!(validate_config(&config).is_err());

        let config = ClientConfig::new().with_base_url("http://127.0.0.1:8080");
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_rejects_inverted_backoff() {
        let mut config = ClientConfig::default();
        config.backoff_base_ms = 500;
        config.backoff_max_ms = 100;
        assert!(validate_config(&config).is_err());
    }
}
