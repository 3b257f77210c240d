//! API Errors
//!
//! Validation failures are reported field by field. Anything else becomes a
//! generic 500; the detail only goes to the log.

use std::any::Any;
use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use mab_core::ContactResponse;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("validation failed on {} field(s)", .0.len())]
    Validation(BTreeMap<String, String>),

    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                Json(ContactResponse::validation_failed(errors)),
            )
                .into_response(),
            ApiError::Internal(detail) => {
                tracing::error!("Contact form API error: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ContactResponse::unexpected()),
                )
                    .into_response()
            }
        }
    }
}

/// Response for a handler panic, used by `CatchPanicLayer`
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");

    ApiError::Internal(format!("handler panicked: {detail}")).into_response()
}
