use crate::presentation::http::state::AppState;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    city_directory: &'static str,
    location_provider: String,
    version: &'static str,
}

pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let cities = state.city_directory.cities().await;
    let directory_status = if cities.is_loading {
        "loading"
    } else if cities.error.is_some() {
        "failed"
    } else {
        "loaded"
    };

    // A failed directory load degrades one panel; the service stays up.
    let status = if directory_status == "failed" {
        "degraded"
    } else {
        "healthy"
    };

    let response = HealthResponse {
        status,
        city_directory: directory_status,
        location_provider: state.config.location_provider.to_string(),
        version: env!("CARGO_PKG_VERSION"),
    };

    (StatusCode::OK, Json(response))
}
