//! Error types for the Voyage AI client

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, VoyageError>;

/// Main error type for the Voyage AI client
#[derive(Error, Debug)]
pub enum VoyageError {
    #[error("voyage: marshal request: {0}")]
    Encoding(#[source] serde_json::Error),

    #[error("voyage: execute request: {0}")]
    Execution(#[source] reqwest::Error),

    #[error("voyage: unmarshal response: {0}")]
    Decoding(#[source] serde_json::Error),

    #[error("voyage: bad request, detail: {detail}")]
    BadRequest { detail: String },

    #[error("voyage: unauthorized, detail: {detail}")]
    Unauthorized { detail: String },

    #[error("voyage: malformed request, detail: {detail}")]
    MalformedRequest { detail: String },

    #[error("voyage: rate limit reached, detail: {detail}")]
    RateLimited { detail: String },

    #[error("voyage: server error (status {status})")]
    Server { status: StatusCode },

    #[error("voyage: configuration error: {0}")]
    Config(String),

    #[error("voyage: image error: {0}")]
    Image(String),

    #[error("voyage: invalid embedding payload: {0}")]
    InvalidEmbedding(String),
}

impl VoyageError {
    /// HTTP status behind this error, if the server answered at all
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            VoyageError::BadRequest { .. } => Some(StatusCode::BAD_REQUEST),
            VoyageError::Unauthorized { .. } => Some(StatusCode::UNAUTHORIZED),
            VoyageError::MalformedRequest { .. } => Some(StatusCode::UNPROCESSABLE_ENTITY),
            VoyageError::RateLimited { .. } => Some(StatusCode::TOO_MANY_REQUESTS),
            VoyageError::Server { status } => Some(*status),
            VoyageError::Execution(e) => e.status(),
            _ => None,
        }
    }

    /// Whether the response status marks this error as transient: 429 and any
    /// status other than 400, 401 or 422. Transport errors report false here
    /// even when `retry_transport_errors` made the retry loop try them again.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            VoyageError::RateLimited { .. } | VoyageError::Server { .. }
        )
    }
}

impl From<config::ConfigError> for VoyageError {
    fn from(err: config::ConfigError) -> Self {
        VoyageError::Config(err.to_string())
    }
}

impl From<image::ImageError> for VoyageError {
    fn from(err: image::ImageError) -> Self {
        VoyageError::Image(err.to_string())
    }
}

/// A response with status >= 400, as received
#[derive(Debug, Clone)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: bytes::Bytes,
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: String,
}

impl ApiError {
    pub fn new(status: StatusCode, body: impl Into<bytes::Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// The `detail` field of a `{"detail": "..."}` body, or an empty string
    /// when the body has another shape.
    pub fn detail(&self) -> String {
        serde_json::from_slice::<ErrorBody>(&self.body)
            .map(|b| b.detail)
            .unwrap_or_default()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "status {}: {}", self.status, String::from_utf8_lossy(&self.body))
    }
}
