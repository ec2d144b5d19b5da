use super::dto::{LocationView, PERMISSION_DENIED_MESSAGE};
use crate::{
    domain::{
        location::entity::{AddressDetail, Coordinate},
        shared::errors::DomainError,
    },
    infrastructure::{
        geocoding::Geocoder, geolocation::PositionSource, http::FetchState,
    },
};
use std::sync::Arc;
use tracing::instrument;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResolverState {
    Idle,
    Requesting,
    Resolved(Coordinate),
    Denied,
}

/// Resolves the device position to a city/state/postal code.
///
/// `Idle → Requesting → Resolved | Denied`. A denied or unavailable position
/// ends in `Denied` without touching the geocoder.
pub struct LocationResolver {
    geocoder: Arc<dyn Geocoder>,
    state: ResolverState,
    address: FetchState<AddressDetail>,
}

impl LocationResolver {
    pub fn new(geocoder: Arc<dyn Geocoder>) -> Self {
        Self {
            geocoder,
            state: ResolverState::Idle,
            address: FetchState::new(),
        }
    }

    pub fn state(&self) -> ResolverState {
        self.state
    }

    /// Runs the position request and, on success, the reverse-geocode fetch.
    ///
    /// Only malformed input (e.g. out-of-range coordinates) is returned as an error;
    /// position and geocoding failures are part of the view.
    #[instrument(skip_all)]
    pub async fn resolve(&mut self, source: &dyn PositionSource) -> Result<LocationView, DomainError> {
        self.state = ResolverState::Requesting;

        match source.current_position().await {
            Ok(at) => {
                self.state = ResolverState::Resolved(at);
                self.refresh_address(at).await;
            }
            Err(err @ (DomainError::PermissionDenied | DomainError::PositionUnavailable)) => {
                tracing::info!(reason = %err, "position request refused");
                self.state = ResolverState::Denied;
            }
            Err(err) => {
                self.state = ResolverState::Idle;
                return Err(err);
            }
        }

        Ok(self.view())
    }

    async fn refresh_address(&mut self, at: Coordinate) {
        let ticket = self.address.begin();
        let result = self.geocoder.reverse(at).await.map(|r| r.address());
        if let Err(err) = &result {
            tracing::warn!(error = %err, "reverse geocoding failed");
        }
        self.address.settle(ticket, result);
    }

    pub fn view(&self) -> LocationView {
        match self.state {
            ResolverState::Idle | ResolverState::Requesting => LocationView::Loading,
            ResolverState::Denied => LocationView::Denied {
                message: PERMISSION_DENIED_MESSAGE.to_string(),
            },
            ResolverState::Resolved(coordinate) => {
                if let Some(err) = self.address.error() {
                    LocationView::Error {
                        coordinate,
                        message: format!("Error: {}", err),
                    }
                } else if let Some(address) = self.address.data() {
                    LocationView::Resolved {
                        coordinate,
                        address: address.clone(),
                    }
                } else {
                    LocationView::Loading
                }
            }
        }
    }
}
