use crate::domain::{
    location::{entity::Coordinate, geocode::GeocodeResponse},
    shared::errors::DomainError,
};
use async_trait::async_trait;

/// Upper bound on results a forward search may ask for.
pub const MAX_PLACE_RESULTS: u32 = 10_000;

/// Forward-geocoding request: free text, optionally restricted to a country.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceQuery {
    pub text: String,
    pub country_code: Option<String>,
    pub limit: u32,
}

impl PlaceQuery {
    pub fn new(text: impl Into<String>, country_code: Option<String>, limit: u32) -> Self {
        Self {
            text: text.into(),
            country_code,
            limit: limit.clamp(1, MAX_PLACE_RESULTS),
        }
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Reverse geocoding: coordinates to address components.
    async fn reverse(&self, at: Coordinate) -> Result<GeocodeResponse, DomainError>;

    /// Forward geocoding: place name to candidate places.
    async fn search(&self, query: &PlaceQuery) -> Result<GeocodeResponse, DomainError>;
}
