use crate::{
    application::city_directory::dto::{CityOption, CitySelection, SelectionQuery},
    infrastructure::http::FetchView,
    presentation::http::{errors::AppError, state::AppState},
};
use axum::{
    Json,
    extract::{Query, State},
};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct RefreshResult {
    /// `null` when a newer refresh overtook this one.
    pub loaded: Option<usize>,
}

pub async fn list_cities(State(state): State<AppState>) -> Json<FetchView<Vec<CityOption>>> {
    Json(state.city_directory.cities().await)
}

pub async fn select_city(
    State(state): State<AppState>,
    Query(params): Query<SelectionQuery>,
) -> Result<Json<CitySelection>, AppError> {
    let selection = state.city_directory.select_city(&params.name).await?;
    Ok(Json(selection))
}

pub async fn refresh_cities(State(state): State<AppState>) -> Result<Json<RefreshResult>, AppError> {
    let loaded = state.city_directory.load_cities().await?;
    Ok(Json(RefreshResult { loaded }))
}
