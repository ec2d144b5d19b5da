use crate::domain::location::entity::Coordinate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One selectable entry of the city directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CityEntry {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl CityEntry {
    pub fn new(name: impl Into<String>, at: Coordinate) -> Self {
        Self {
            name: name.into(),
            latitude: at.latitude,
            longitude: at.longitude,
        }
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }

    /// Dropdown label, e.g. `Pune (18.52, 73.85)`.
    pub fn label(&self) -> String {
        format!("{} ({}, {})", self.name, self.latitude, self.longitude)
    }
}

/// Exact-name lookup; the first entry wins when names repeat.
pub fn find_by_name<'a>(entries: &'a [CityEntry], name: &str) -> Option<&'a CityEntry> {
    entries.iter().find(|entry| entry.name == name)
}
