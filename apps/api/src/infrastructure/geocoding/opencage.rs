use super::traits::{Geocoder, PlaceQuery};
use crate::{
    domain::{
        location::{entity::Coordinate, geocode::GeocodeResponse},
        shared::errors::DomainError,
    },
    infrastructure::http::HttpFetcher,
};
use async_trait::async_trait;
use tracing::instrument;

pub const DEFAULT_BASE_URL: &str = "https://api.opencagedata.com/geocode/v1/json";

/// OpenCage geocoding API. Its JSON already has the shared response shape.
pub struct OpenCageGeocoder {
    fetcher: HttpFetcher,
    base_url: String,
    api_key: String,
}

impl OpenCageGeocoder {
    pub fn new(fetcher: HttpFetcher, base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            fetcher,
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    fn reverse_params(&self, at: Coordinate) -> Vec<(&'static str, String)> {
        vec![
            ("q", at.to_query()),
            ("no_annotations", "1".to_string()),
            ("key", self.api_key.clone()),
        ]
    }

    fn search_params(&self, query: &PlaceQuery) -> Vec<(&'static str, String)> {
        let mut params = vec![("q", query.text.clone())];
        if let Some(country) = &query.country_code {
            params.push(("countrycode", country.to_lowercase()));
        }
        params.push(("no_annotations", "1".to_string()));
        params.push(("limit", query.limit.to_string()));
        params.push(("key", self.api_key.clone()));
        params
    }
}

#[async_trait]
impl Geocoder for OpenCageGeocoder {
    #[instrument(skip(self))]
    async fn reverse(&self, at: Coordinate) -> Result<GeocodeResponse, DomainError> {
        self.fetcher
            .get_json(&self.base_url, &self.reverse_params(at))
            .await
    }

    #[instrument(skip(self))]
    async fn search(&self, query: &PlaceQuery) -> Result<GeocodeResponse, DomainError> {
        let response: GeocodeResponse = self
            .fetcher
            .get_json(&self.base_url, &self.search_params(query))
            .await?;
        tracing::debug!(results = response.results.len(), "opencage search settled");
        Ok(response)
    }
}
