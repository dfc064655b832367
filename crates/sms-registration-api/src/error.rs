//! Error types for the registration service.

use crate::store::StoreError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use telnyx_client::TelnyxError;
use thiserror::Error;

/// Service error types.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Phone number already registered: {0}")]
    DuplicatePhoneNumber(String),

    #[error("Invalid webhook event: {0}")]
    Event(#[from] TelnyxError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ApiError::DuplicatePhoneNumber(_) => {
                (StatusCode::BAD_REQUEST, "PHONE_NUMBER_ALREADY_REGISTERED")
            }
            ApiError::Event(_) => (StatusCode::BAD_REQUEST, "INVALID_EVENT"),
            ApiError::Store(StoreError::ConstraintViolation(_)) => {
                (StatusCode::CONFLICT, "CONSTRAINT_VIOLATION")
            }
            ApiError::Store(_) => (StatusCode::INTERNAL_SERVER_ERROR, "STORE_ERROR"),
        };

        let body = ErrorResponse {
            error: self.to_string(),
            code: code.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
