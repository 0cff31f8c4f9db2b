//! Maps error responses to a retry decision and a descriptive error

use crate::error::{ApiError, VoyageError};
use reqwest::StatusCode;

/// Outcome of classifying one error response
#[derive(Debug)]
pub(crate) struct Classification {
    pub retryable: bool,
    pub error: VoyageError,
}

/// | Status | Retryable |
/// |--------|-----------|
/// | 400, 401, 422 | no |
/// | 429 | yes |
/// | anything else | yes |
pub(crate) fn classify(api_error: &ApiError) -> Classification {
    let (retryable, error) = match api_error.status {
        StatusCode::BAD_REQUEST => (
            false,
            VoyageError::BadRequest {
                detail: api_error.detail(),
            },
        ),
        StatusCode::UNAUTHORIZED => (
            false,
            VoyageError::Unauthorized {
                detail: api_error.detail(),
            },
        ),
        StatusCode::UNPROCESSABLE_ENTITY => (
            false,
            VoyageError::MalformedRequest {
                detail: api_error.detail(),
            },
        ),
        StatusCode::TOO_MANY_REQUESTS => (
            true,
            VoyageError::RateLimited {
                detail: api_error.detail(),
            },
        ),
        status => (true, VoyageError::Server { status }),
    };

    Classification { retryable, error }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify_status(code: u16, body: &'static str) -> Classification {
        classify(&ApiError::new(StatusCode::from_u16(code).unwrap(), body))
    }

    #[test]
    fn test_client_errors_are_fatal() {
        let c = classify_status(400, r#"{"detail":"empty input"}"#);
        assert!(!c.retryable);
        assert_eq!(c.error.to_string(), "voyage: bad request, detail: empty input");

        let c = classify_status(401, r#"{"detail":"invalid key"}"#);
        assert!(!c.retryable);
        assert!(matches!(c.error, VoyageError::Unauthorized { ref detail } if detail == "invalid key"));

        let c = classify_status(422, r#"{"detail":"model missing"}"#);
        assert!(!c.retryable);
        assert!(matches!(c.error, VoyageError::MalformedRequest { .. }));
    }

    #[test]
    fn test_rate_limit_is_retryable() {
        let c = classify_status(429, r#"{"detail":"slow down"}"#);
        assert!(c.retryable);
        assert_eq!(c.error.to_string(), "voyage: rate limit reached, detail: slow down");
    }

    #[test]
    fn test_everything_else_is_a_retryable_server_error() {
        for code in [500, 502, 503, 504, 403, 404, 409] {
            let c = classify_status(code, "oops");
            assert!(c.retryable, "status {} should be retryable", code);
            assert!(matches!(c.error, VoyageError::Server { status } if status.as_u16() == code));
        }
    }

    #[test]
    fn test_unparseable_detail_does_not_change_outcome() {
        let c = classify_status(400, "not json at all");
        assert!(!c.retryable);
        assert!(matches!(c.error, VoyageError::BadRequest { ref detail } if detail.is_empty()));
    }
}
