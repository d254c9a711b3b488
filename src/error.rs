// src/error.rs

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;

/// Global Application Error Enum.
/// Centralizes error handling and mapping to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    // 500 Internal Server Error: any persistence failure that is not a
    // duplicate submission.
    Storage(sqlx::Error),

    // 500 Internal Server Error: a stored row that no longer decodes
    // (e.g. malformed options text). Logged with full context, reported
    // generically.
    CorruptRecord(String),

    // 400 Bad Request: second submission for an already-recorded roll number.
    DuplicateSubmission,

    // 400 Bad Request: request payload failed validation.
    BadRequest(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for AppError {}

/// Implements `IntoResponse` for `AppError`.
/// Converts the error into the `{success, message}` envelope with the
/// appropriate HTTP status code. Store error codes and driver details never
/// reach the client.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Storage(err) => {
                tracing::error!("Storage failure: {:?}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
            AppError::CorruptRecord(context) => {
                tracing::error!("Corrupt record: {}", context);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
            AppError::DuplicateSubmission => (
                StatusCode::BAD_REQUEST,
                "Roll number already submitted".to_string(),
            ),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
        };

        let body = Json(json!({
            "success": false,
            "message": message,
        }));

        (status, body).into_response()
    }
}

/// Converts `sqlx::Error` into `AppError::Storage`.
/// Allows using `?` operator on database queries.
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::Storage(err)
    }
}
