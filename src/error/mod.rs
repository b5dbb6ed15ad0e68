//! Error taxonomy for Deploy API calls.
//!
//! HTTP statuses map onto fixed kinds; each carries the parsed JSON error
//! body so diagnostics keep the server's full message. Transport failures
//! pass through unclassified as [`HttpError`].

use serde_json::Value;
use thiserror::Error;

use crate::traits::HttpError;

/// Errors produced by [`crate::api::DeployClient`].
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP 400
    #[error("Bad Request: {}", render_body(.0))]
    BadRequest(Value),

    /// HTTP 401
    #[error("Unauthorized: {}", render_body(.0))]
    Unauthorized(Value),

    /// HTTP 403
    #[error("Forbidden: {}", render_body(.0))]
    Forbidden(Value),

    /// HTTP 429
    #[error("Rate Limited: {}", render_body(.0))]
    RateLimited(Value),

    /// Any other 4xx
    #[error("Client Error ({status}): {}", render_body(body))]
    Client { status: u16, body: Value },

    /// Any 5xx
    #[error("Server Error ({status}): {}", render_body(body))]
    Server { status: u16, body: Value },

    /// Transport failure, surfaced as reported
    #[error(transparent)]
    Http(#[from] HttpError),

    /// Response body was not the JSON shape the method expected
    #[error("Invalid response body: {0}")]
    Json(#[from] serde_json::Error),
}

impl ApiError {
    /// Classify a status code, passing the parsed body through on success.
    ///
    /// 2xx/3xx are Ok; 4xx/5xx become the corresponding error kind carrying
    /// the body.
    pub fn check_status(status: u16, body: Value) -> Result<Value, ApiError> {
        match status {
            400 => Err(ApiError::BadRequest(body)),
            401 => Err(ApiError::Unauthorized(body)),
            403 => Err(ApiError::Forbidden(body)),
            429 => Err(ApiError::RateLimited(body)),
            400..=499 => Err(ApiError::Client { status, body }),
            500..=599 => Err(ApiError::Server { status, body }),
            _ => Ok(body),
        }
    }

    /// The raw parsed error body, for kinds that carry one.
    pub fn body(&self) -> Option<&Value> {
        match self {
            ApiError::BadRequest(body)
            | ApiError::Unauthorized(body)
            | ApiError::Forbidden(body)
            | ApiError::RateLimited(body)
            | ApiError::Client { body, .. }
            | ApiError::Server { body, .. } => Some(body),
            ApiError::Http(_) | ApiError::Json(_) => None,
        }
    }
}

/// Full rendering of the error body for diagnostics.
fn render_body(body: &Value) -> String {
    serde_json::to_string_pretty(body).unwrap_or_else(|_| body.to_string())
}
