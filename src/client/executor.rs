//! One request attempt: serialize, send, check status, deserialize

use super::transport::HttpTransport;
use crate::error::{ApiError, VoyageError};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Why a single attempt failed
#[derive(Debug)]
pub(crate) enum AttemptError {
    /// The request could not be serialized
    Encoding(serde_json::Error),
    /// The request could not be sent or the response could not be read
    Execution(reqwest::Error),
    /// The server answered with status >= 400
    Status(ApiError),
    /// A success response did not match the expected shape
    Decoding(serde_json::Error),
}

impl From<AttemptError> for VoyageError {
    /// Status errors are converted through the classifier
    fn from(err: AttemptError) -> Self {
        match err {
            AttemptError::Encoding(e) => VoyageError::Encoding(e),
            AttemptError::Execution(e) => VoyageError::Execution(e),
            AttemptError::Decoding(e) => VoyageError::Decoding(e),
            AttemptError::Status(api_error) => super::classify::classify(&api_error).error,
        }
    }
}

pub(crate) async fn execute<Req, Resp>(
    transport: &HttpTransport,
    url: &str,
    request: &Req,
) -> Result<Resp, AttemptError>
where
    Req: Serialize + ?Sized,
    Resp: DeserializeOwned,
{
    let body = serde_json::to_vec(request).map_err(AttemptError::Encoding)?;

    let response = transport
        .post(url, body)
        .await
        .map_err(AttemptError::Execution)?;

    if response.status.as_u16() >= 400 {
        return Err(AttemptError::Status(ApiError::new(response.status, response.body)));
    }

    serde_json::from_slice(&response.body).map_err(AttemptError::Decoding)
}
