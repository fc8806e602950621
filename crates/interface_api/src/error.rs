//! API error handling
//!
//! Every failure leaves the API as an [`ErrorDto`]:
//!
//! | Error | Status | Key |
//! |---|---|---|
//! | invalid input | 400 | `invalid_input` |
//! | unknown policy | 404 | `insurance_policy_not_found` |
//! | unparseable body or path | 400 | `invalid_format` |
//! | anything else | 500 | `internal_error` |

use std::any::Any;

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

use domain_policy::error::INTERNAL_ERROR_KEY;
use domain_policy::{ErrorType, FieldError, PolicyError};

pub const INVALID_FORMAT_KEY: &str = "invalid_format";

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Policy(#[from] PolicyError),

    /// The request could not be parsed
    #[error("{0}")]
    InvalidFormat(String),

    /// Unexpected failure outside the domain, such as a panicking handler
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Policy(error) => match error.error_type() {
                ErrorType::InvalidData => StatusCode::BAD_REQUEST,
                ErrorType::NotFoundData => StatusCode::NOT_FOUND,
                ErrorType::Internal => StatusCode::INTERNAL_SERVER_ERROR,
            },
            ApiError::InvalidFormat(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            ApiError::Policy(error) => error.functional_key(),
            ApiError::InvalidFormat(_) => INVALID_FORMAT_KEY,
            ApiError::Internal(_) => INTERNAL_ERROR_KEY,
        }
    }

    pub fn to_dto(&self) -> ErrorDto {
        let field_errors = match self {
            ApiError::Policy(error) => error.field_errors().iter().map(FieldErrorDto::from).collect(),
            _ => Vec::new(),
        };
        ErrorDto {
            key: self.key().to_string(),
            message: self.to_string(),
            field_errors,
        }
    }
}

/// Error response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDto {
    pub key: String,
    pub message: String,
    pub field_errors: Vec<FieldErrorDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldErrorDto {
    pub field_name: String,
    pub message: String,
}

impl From<&FieldError> for FieldErrorDto {
    fn from(error: &FieldError) -> Self {
        Self {
            field_name: error.field_name.clone(),
            message: error.message.clone(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(error = ?self, "Request failed");
        }
        (status, Json(self.to_dto())).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidFormat(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::InvalidFormat(rejection.body_text())
    }
}

/// Turns a handler panic into a `500 internal_error` response
///
/// Used with `tower_http::catch_panic::CatchPanicLayer::custom`.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_string()
    } else {
        "Unexpected panic while handling the request".to_string()
    };
    ApiError::Internal(message).into_response()
}
