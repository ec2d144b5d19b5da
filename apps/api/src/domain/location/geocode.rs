//! Geocoding response shape shared by every provider.
//!
//! Providers decode (or translate) their payload into [`GeocodeResponse`]; the
//! first result is authoritative and missing components read as empty strings.

use super::entity::{AddressDetail, Coordinate};
use crate::domain::city::entity::CityEntry;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeocodeResponse {
    #[serde(default)]
    pub results: Vec<GeocodeResult>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeocodeResult {
    #[serde(default)]
    pub components: AddressComponents,
    pub geometry: Option<Geometry>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddressComponents {
    pub city: Option<String>,
    pub town: Option<String>,
    pub village: Option<String>,
    pub county: Option<String>,
    pub state: Option<String>,
    pub postcode: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    pub lat: f64,
    pub lng: f64,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl AddressComponents {
    /// city → town → village → county, first non-empty wins.
    pub fn locality(&self) -> &str {
        [&self.city, &self.town, &self.village, &self.county]
            .into_iter()
            .find_map(non_empty)
            .unwrap_or_default()
    }

    pub fn to_address(&self) -> AddressDetail {
        AddressDetail {
            city: self.locality().to_string(),
            state: non_empty(&self.state).unwrap_or_default().to_string(),
            postal_code: non_empty(&self.postcode).unwrap_or_default().to_string(),
        }
    }
}

impl GeocodeResponse {
    pub fn first(&self) -> Option<&GeocodeResult> {
        self.results.first()
    }

    /// Address of the first result, or an empty address when there are none.
    pub fn address(&self) -> AddressDetail {
        self.first()
            .map(|r| r.components.to_address())
            .unwrap_or_default()
    }

    /// Directory entries for every result carrying a city name and a geometry.
    pub fn city_entries(&self) -> Vec<CityEntry> {
        self.results
            .iter()
            .filter_map(|result| {
                let name = non_empty(&result.components.city)?;
                let geometry = result.geometry?;
                Some(CityEntry::new(
                    name,
                    Coordinate::new(geometry.lat, geometry.lng),
                ))
            })
            .collect()
    }
}
