use crate::domain::registration::rules::FieldErrors;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum DomainError {
    #[error("Permission denied")]
    PermissionDenied,
    #[error("Position unavailable")]
    PositionUnavailable,
    #[error("Network failure: {0}")]
    NetworkFailure(String),
    #[error("Validation failed for {} field(s)", .0.len())]
    Validation(FieldErrors),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
