//! Google Maps geocoding API, translated into the shared response shape.

use super::traits::{Geocoder, PlaceQuery};
use crate::{
    domain::{
        location::{
            entity::Coordinate,
            geocode::{AddressComponents, GeocodeResponse, GeocodeResult, Geometry},
        },
        shared::errors::DomainError,
    },
    infrastructure::http::HttpFetcher,
};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::instrument;

pub const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";

#[derive(Debug, Deserialize)]
struct GoogleResponse {
    status: String,
    #[serde(default)]
    results: Vec<GoogleResult>,
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GoogleResult {
    #[serde(default)]
    address_components: Vec<GoogleComponent>,
    geometry: Option<GoogleGeometry>,
}

#[derive(Debug, Deserialize)]
struct GoogleComponent {
    long_name: String,
    #[serde(default)]
    types: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct GoogleGeometry {
    location: GoogleLatLng,
}

#[derive(Debug, Deserialize)]
struct GoogleLatLng {
    lat: f64,
    lng: f64,
}

fn first_of_type(components: &[GoogleComponent], types: &[&str]) -> Option<String> {
    components
        .iter()
        .find(|c| c.types.iter().any(|t| types.contains(&t.as_str())))
        .map(|c| c.long_name.clone())
}

impl From<GoogleResult> for GeocodeResult {
    fn from(result: GoogleResult) -> Self {
        let parts = &result.address_components;
        GeocodeResult {
            components: AddressComponents {
                city: first_of_type(parts, &["locality", "administrative_area_level_2"]),
                town: None,
                village: None,
                county: first_of_type(parts, &["administrative_area_level_2"]),
                state: first_of_type(parts, &["administrative_area_level_1"]),
                postcode: first_of_type(parts, &["postal_code"]),
            },
            geometry: result.geometry.map(|g| Geometry {
                lat: g.location.lat,
                lng: g.location.lng,
            }),
        }
    }
}

impl GoogleResponse {
    fn into_response(self, limit: usize) -> Result<GeocodeResponse, DomainError> {
        match self.status.as_str() {
            "OK" | "ZERO_RESULTS" => Ok(GeocodeResponse {
                results: self.results.into_iter().take(limit).map(Into::into).collect(),
            }),
            status => Err(DomainError::NetworkFailure(match self.error_message {
                Some(message) => format!("{}: {}", status, message),
                None => status.to_string(),
            })),
        }
    }
}

pub struct GoogleGeocoder {
    fetcher: HttpFetcher,
    base_url: String,
    api_key: String,
}

impl GoogleGeocoder {
    pub fn new(fetcher: HttpFetcher, base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            fetcher,
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    fn search_params(&self, query: &PlaceQuery) -> Vec<(&'static str, String)> {
        let mut params = vec![("address", query.text.clone())];
        if let Some(country) = &query.country_code {
            params.push(("components", format!("country:{}", country.to_uppercase())));
        }
        params.push(("key", self.api_key.clone()));
        params
    }
}

#[async_trait]
impl Geocoder for GoogleGeocoder {
    #[instrument(skip(self))]
    async fn reverse(&self, at: Coordinate) -> Result<GeocodeResponse, DomainError> {
        let params = [("latlng", at.to_query()), ("key", self.api_key.clone())];
        let response: GoogleResponse = self.fetcher.get_json(&self.base_url, &params).await?;
        response.into_response(usize::MAX)
    }

    /// Forward search by address text. The city directory is served by OpenCage,
    /// so this path only runs when a caller wires Google in directly.
    #[instrument(skip(self))]
    async fn search(&self, query: &PlaceQuery) -> Result<GeocodeResponse, DomainError> {
        let response: GoogleResponse = self
            .fetcher
            .get_json(&self.base_url, &self.search_params(query))
            .await?;
        response.into_response(query.limit as usize)
    }
}
