//! Unified error types for the sample service.
//!
//! Every failure surfaces to the client as a JSON object with a single
//! `error` field. The variant-to-status mapping lives in one place (the
//! [`IntoResponse`] impl) so the taxonomy stays centrally enforced.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Unified error type for request handling.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Request body is absent, empty, or not a JSON object.
    #[error("No JSON data provided")]
    InvalidRequest,

    /// One or more required parameters are missing.
    #[error("Missing required parameters: a, b, operation")]
    MissingParameters,

    /// Parameters are present but not coercible to numbers.
    #[error("Parameters a and b must be numbers")]
    InvalidType,

    /// Division with a zero divisor.
    #[error("Cannot divide by zero")]
    DivisionByZero,

    /// Operation name outside the supported set.
    #[error("Invalid operation. Use: add, subtract, multiply, divide, power")]
    UnsupportedOperation,

    /// No route matched the request.
    #[error("Endpoint not found")]
    NotFound,

    /// Unexpected internal fault.
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP status code for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidRequest
            | ApiError::MissingParameters
            | ApiError::InvalidType
            | ApiError::DivisionByZero
            | ApiError::UnsupportedOperation => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Uniform error body: `{"error": "..."}`.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(ErrorResponse {
            error: self.to_string(),
        });

        (status, body).into_response()
    }
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, ApiError>;
