use serde::{Deserialize, Serialize};
use ts_rs::TS;
use validator::Validate;

/// A WGS84 position as reported by the device.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate, TS)]
#[ts(export)]
pub struct Coordinate {
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// `"lat,lng"`, the reverse-geocoding query form both providers accept.
    pub fn to_query(&self) -> String {
        format!("{},{}", self.latitude, self.longitude)
    }
}

/// City, state and postal code of a place. Absent parts are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AddressDetail {
    pub city: String,
    pub state: String,
    pub postal_code: String,
}

impl AddressDetail {
    /// The page only renders the details block once all three parts are known.
    pub fn is_complete(&self) -> bool {
        !self.city.is_empty() && !self.state.is_empty() && !self.postal_code.is_empty()
    }
}
