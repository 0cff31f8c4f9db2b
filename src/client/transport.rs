//! Single HTTP POST with bearer authentication

use crate::error::{Result, VoyageError};
use bytes::Bytes;
use reqwest::header::{HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, Secret};
use tracing::debug;

/// Status and fully read body of one response
#[derive(Debug)]
pub(crate) struct RawResponse {
    pub status: StatusCode,
    pub body: Bytes,
}

pub(crate) struct HttpTransport {
    http_client: Client,
    auth: HeaderValue,
}

impl HttpTransport {
    pub fn new(http_client: Client, api_key: &Secret<String>) -> Result<Self> {
        let mut auth = HeaderValue::from_str(&format!("BEARER {}", api_key.expose_secret()))
            .map_err(|e| VoyageError::Config(format!("API key is not a valid header value: {}", e)))?;
        auth.set_sensitive(true);

        Ok(Self { http_client, auth })
    }

    /// POST `body` as JSON to `url`
    ///
    /// The body is read to the end before returning, so the connection goes
    /// back to the pool whether the status is a success or not.
    pub async fn post(&self, url: &str, body: Vec<u8>) -> std::result::Result<RawResponse, reqwest::Error> {
        let response = self
            .http_client
            .post(url)
            .header(AUTHORIZATION, self.auth.clone())
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .body(body)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;

        debug!("POST {} -> {} ({} bytes)", url, status, body.len());
        Ok(RawResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_header_is_sensitive() {
        let transport = HttpTransport::new(Client::new(), &Secret::new("k-123".to_string())).unwrap();
        assert_eq!(transport.auth.to_str().unwrap(), "BEARER k-123");
        assert!(transport.auth.is_sensitive());
    }

    #[test]
    fn test_key_with_newline_rejected() {
        let result = HttpTransport::new(Client::new(), &Secret::new("bad\nkey".to_string()));
        assert!(matches!(result, Err(VoyageError::Config(_))));
    }
}
