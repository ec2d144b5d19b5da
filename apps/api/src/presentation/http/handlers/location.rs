use crate::{
    application::resolve_location::{dto::LocationView, use_case::LocationResolver},
    infrastructure::geolocation::PositionReport,
    presentation::http::{errors::AppError, state::AppState},
};
use axum::{Json, extract::State};

/// Resolves the position the page obtained from the browser.
pub async fn resolve_location(
    State(state): State<AppState>,
    Json(report): Json<PositionReport>,
) -> Result<Json<LocationView>, AppError> {
    let mut resolver = LocationResolver::new(state.location_geocoder.clone());
    let view = resolver.resolve(&report).await?;
    Ok(Json(view))
}
