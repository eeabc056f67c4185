//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::TimetableError;
use crate::services::conflicts::Conflict;

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// Conflicting entries, present on scheduling-conflict responses
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conflicts: Option<Vec<Conflict>>,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
            conflicts: None,
        }
    }

    pub fn with_conflicts(mut self, conflicts: Vec<Conflict>) -> Self {
        self.conflicts = Some(conflicts);
        self
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Invalid request (validation error)
    BadRequest(String),
    /// Resource not found
    NotFound(String),
    /// Candidate collides with active entries
    Conflict(Vec<Conflict>),
    /// Internal server error
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ApiError::new("VALIDATION_ERROR", msg))
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, ApiError::new("NOT_FOUND", msg)),
            AppError::Conflict(conflicts) => (
                StatusCode::CONFLICT,
                ApiError::new(
                    "SCHEDULING_CONFLICT",
                    format!(
                        "Candidate overlaps {} active entries",
                        conflicts.len()
                    ),
                )
                .with_conflicts(conflicts),
            ),
            AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::new("STORE_ERROR", msg),
            ),
        };

        (status, Json(error)).into_response()
    }
}

impl From<TimetableError> for AppError {
    fn from(err: TimetableError) -> Self {
        match err {
            TimetableError::Validation(msg) => AppError::BadRequest(msg),
            TimetableError::Conflict { conflicts } => AppError::Conflict(conflicts),
            TimetableError::NotFound(msg) => AppError::NotFound(msg),
            TimetableError::Store(msg) => AppError::Internal(msg),
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}
