use crate::domain::location::entity::{AddressDetail, Coordinate};
use serde::Serialize;
use ts_rs::TS;

pub const PERMISSION_DENIED_MESSAGE: &str = "Permission denied";

/// What the "current location" panel renders.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(tag = "status", rename_all = "snake_case")]
#[ts(export)]
pub enum LocationView {
    Loading,
    Denied {
        message: String,
    },
    Resolved {
        coordinate: Coordinate,
        address: AddressDetail,
    },
    Error {
        coordinate: Coordinate,
        message: String,
    },
}
