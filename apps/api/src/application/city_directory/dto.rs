use crate::domain::{city::entity::CityEntry, location::entity::AddressDetail};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Dropdown option for one directory entry.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct CityOption {
    #[serde(flatten)]
    pub entry: CityEntry,
    pub label: String,
}

impl From<CityEntry> for CityOption {
    fn from(entry: CityEntry) -> Self {
        let label = entry.label();
        Self { entry, label }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SelectionQuery {
    #[serde(default)]
    pub name: String,
}

/// Details of the selected city. Unknown selections carry empty fields.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CitySelection {
    pub selected: String,
    pub entry: Option<CityEntry>,
    #[serde(flatten)]
    pub address: AddressDetail,
    /// The details block is only shown when every field is known.
    pub show_details: bool,
}

impl CitySelection {
    pub fn cleared(selected: impl Into<String>) -> Self {
        Self {
            selected: selected.into(),
            entry: None,
            address: AddressDetail::default(),
            show_details: false,
        }
    }

    pub fn found(entry: CityEntry, address: AddressDetail) -> Self {
        Self {
            selected: entry.name.clone(),
            show_details: address.is_complete(),
            entry: Some(entry),
            address,
        }
    }
}
