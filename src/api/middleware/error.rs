use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;

use crate::domain::errors::HolidayError;

#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Conflict(String),
    ServiceUnavailable(String),
    Internal(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ApiError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            ApiError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            ApiError::ServiceUnavailable(msg) => write!(f, "Service unavailable: {}", msg),
            ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::ServiceUnavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

// Convert from domain errors. Malformed and absent ids both surface as 404:
// the client cannot tell them apart and should not have to.
impl From<HolidayError> for ApiError {
    fn from(err: HolidayError) -> Self {
        let message = err.to_string();
        match err {
            HolidayError::InvalidRange { .. }
            | HolidayError::InvalidField(_)
            | HolidayError::Validation(_) => ApiError::BadRequest(message),
            HolidayError::OverlapConflict { .. } => ApiError::Conflict(message),
            HolidayError::InvalidIdentifier(_) => {
                ApiError::NotFound("Invalid ID format".to_string())
            }
            HolidayError::NotFound(_) => ApiError::NotFound("Holiday not found".to_string()),
            HolidayError::StorageUnavailable(_) => ApiError::ServiceUnavailable(message),
            HolidayError::MalformedRecord(_) | HolidayError::Internal(_) => {
                ApiError::Internal(message)
            }
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
