use super::{
    handlers::{cities, health, location, registration},
    middleware::{logging::logging_middleware, request_id::request_id_middleware},
    state::AppState,
};
use axum::{
    Router, middleware,
    routing::{get, post},
};

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/health", get(health::health_check))
        // Current location
        .route("/api/v1/location", post(location::resolve_location))
        // City directory
        .route("/api/v1/cities", get(cities::list_cities))
        .route("/api/v1/cities/selection", get(cities::select_city))
        .route("/api/v1/cities/refresh", post(cities::refresh_cities))
        // Registration form
        .route(
            "/api/v1/registrations/validate",
            post(registration::validate_registration),
        )
        .route("/api/v1/registrations", post(registration::submit_registration))
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
