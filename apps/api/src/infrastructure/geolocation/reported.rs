use super::traits::PositionSource;
use crate::domain::{location::entity::Coordinate, shared::errors::DomainError};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use validator::Validate;

/// Outcome of the browser's position request, as posted by the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "status", rename_all = "snake_case")]
#[ts(export)]
pub enum PositionReport {
    Granted { latitude: f64, longitude: f64 },
    Denied,
    Unavailable,
}

#[async_trait]
impl PositionSource for PositionReport {
    async fn current_position(&self) -> Result<Coordinate, DomainError> {
        match *self {
            PositionReport::Granted {
                latitude,
                longitude,
            } => {
                let at = Coordinate::new(latitude, longitude);
                at.validate()
                    .map_err(|e| DomainError::InvalidInput(e.to_string()))?;
                Ok(at)
            }
            PositionReport::Denied => Err(DomainError::PermissionDenied),
            PositionReport::Unavailable => Err(DomainError::PositionUnavailable),
        }
    }
}
