//! Status-code interpretation shared by every endpoint

use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::error::{MmError, MmResult};

use super::types::ErrorResponse;

/// Non-success answer from the tournament server.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("authentication failed: {0}")]
    Unauthorized(String),

    #[error("server error: {error}{}", .details.as_ref().map(|d| format!(" ({})", d)).unwrap_or_default())]
    Server {
        error: String,
        details: Option<String>,
    },

    #[error("request failed ({status}): {error}")]
    Other { status: StatusCode, error: String },

    /// Error status with a body that was not the usual `{error, details}` shape
    #[error("request failed with status: {0}")]
    Status(StatusCode),
}

impl ApiError {
    pub(crate) fn from_parts(status: StatusCode, body: Option<ErrorResponse>) -> Self {
        let Some(body) = body else {
            return ApiError::Status(status);
        };

        match status.as_u16() {
            400 => ApiError::BadRequest(body.error),
            401 => ApiError::Unauthorized(body.error),
            500 => ApiError::Server {
                error: body.error,
                details: body.details,
            },
            _ => ApiError::Other {
                status,
                error: body.error,
            },
        }
    }
}

/// Turn a non-success response into an `ApiError`, passing successes through.
pub(crate) async fn check_status(response: Response) -> MmResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.json::<ErrorResponse>().await.ok();
    tracing::debug!(%status, has_body = body.is_some(), "api request rejected");
    Err(ApiError::from_parts(status, body).into())
}

/// Decode a JSON body on success, or map the error status.
pub(crate) async fn parse_response<T: DeserializeOwned>(response: Response) -> MmResult<T> {
    let response = check_status(response).await?;
    response.json::<T>().await.map_err(MmError::Decode)
}
