//! Unified error types for the AI Saved Me API
//!
//! This module defines error types for each layer:
//! - `DomainError`: Core business logic errors
//! - `AppError`: Application layer errors (wraps domain errors for HTTP responses)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Domain layer errors - pure business logic errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Story not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Database error: {0}")]
    Database(String),
}

/// A single failing submission field
#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Validation failed: {}", .0.first().map(|e| e.message.as_str()).unwrap_or("invalid submission"))]
    Validation(Vec<FieldError>),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
    /// Per-field messages for intake validation failures
    #[serde(skip_serializing_if = "Option::is_none")]
    fields: Option<Vec<FieldError>>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details, fields) = match self {
            AppError::Domain(DomainError::NotFound(msg)) => {
                (StatusCode::NOT_FOUND, "Not found", Some(msg), None)
            }
            AppError::Domain(DomainError::Validation(msg)) => {
                (StatusCode::BAD_REQUEST, "Validation error", Some(msg), None)
            }
            AppError::Domain(DomainError::Conflict(msg)) => {
                (StatusCode::CONFLICT, "Conflict", Some(msg), None)
            }
            AppError::Domain(DomainError::Unavailable(msg)) => {
                tracing::error!("Store unavailable: {}", msg);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "Story store unavailable",
                    None,
                    None,
                )
            }
            AppError::Domain(DomainError::Database(msg)) => {
                tracing::error!("Database error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    None,
                    None,
                )
            }
            AppError::Validation(errors) => {
                // Surface the first failing field's message plus the full list
                let first = errors
                    .first()
                    .map(|e| e.message.clone())
                    .unwrap_or_else(|| "invalid submission".to_string());
                (
                    StatusCode::BAD_REQUEST,
                    "Validation error",
                    Some(first),
                    Some(errors),
                )
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "Bad request", Some(msg), None),
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized", None, None),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "Not found", Some(msg), None),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    None,
                    None,
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            details,
            fields,
        });

        (status, body).into_response()
    }
}
