use crate::{
    application::register::dto::{SubmissionReceipt, ValidationReport},
    domain::registration::{entity::FormValues, form::RegistrationForm},
    presentation::http::{errors::AppError, state::AppState},
};
use axum::{Json, extract::State, http::StatusCode};

/// Errors to display for the page's current form state (values, visited fields,
/// submit attempted).
pub async fn validate_registration(
    State(state): State<AppState>,
    Json(form): Json<RegistrationForm>,
) -> Json<ValidationReport> {
    Json(state.registration.validate(&form))
}

pub async fn submit_registration(
    State(state): State<AppState>,
    Json(values): Json<FormValues>,
) -> Result<(StatusCode, Json<SubmissionReceipt>), AppError> {
    let receipt = state.registration.execute(values).await?;
    Ok((StatusCode::ACCEPTED, Json(receipt)))
}
