//! HTTP error handling and response conversion.
//!
//! Handlers return [`AppError`], which maps each failure category to a status code
//! and a JSON body of the form `{"error": "..."}`. Field validation failures add a
//! `fields` object keyed by form field name.

use crate::domain::{registration::rules::FieldErrors, shared::errors::DomainError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;

/// Application-level errors returned from handlers.
#[derive(Debug)]
pub enum AppError {
    /// Malformed request (400).
    BadRequest(String),

    /// Form fields failed their rules (422).
    InvalidFields(FieldErrors),

    /// Geolocation refused or unavailable (403).
    PermissionDenied(String),

    /// Upstream geocoding or submission service failed (503).
    ExternalService(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            Self::InvalidFields(fields) => write!(f, "Invalid fields: {}", fields.len()),
            Self::PermissionDenied(msg) => write!(f, "Permission denied: {}", msg),
            Self::ExternalService(msg) => write!(f, "External service error: {}", msg),
        }
    }
}

impl AppError {
    /// Get the appropriate HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::InvalidFields(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::PermissionDenied(_) => StatusCode::FORBIDDEN,
            Self::ExternalService(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    /// Get a user-safe error message (without implementation details).
    fn user_message(&self) -> String {
        match self {
            Self::BadRequest(msg) => msg.clone(),
            Self::InvalidFields(_) => "Validation failed".into(),
            Self::PermissionDenied(msg) => msg.clone(),
            Self::ExternalService(msg) => msg.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.user_message();

        match status {
            StatusCode::SERVICE_UNAVAILABLE => {
                tracing::error!("error={}", self);
            }
            StatusCode::BAD_REQUEST | StatusCode::FORBIDDEN => {
                tracing::warn!("error={}", self);
            }
            _ => {
                tracing::info!("error={}", self);
            }
        }

        let body = match self {
            Self::InvalidFields(fields) => json!({ "error": message, "fields": fields }),
            _ => json!({ "error": message }),
        };
        (status, Json(body)).into_response()
    }
}

// === Domain Error Conversion ===

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::PermissionDenied | DomainError::PositionUnavailable => {
                AppError::PermissionDenied(err.to_string())
            }
            DomainError::NetworkFailure(msg) => AppError::ExternalService(msg),
            DomainError::Validation(fields) => AppError::InvalidFields(fields),
            DomainError::InvalidInput(msg) => AppError::BadRequest(msg),
        }
    }
}
