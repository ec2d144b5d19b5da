use super::dto::{CityOption, CitySelection};
use crate::{
    domain::{
        city::entity::{CityEntry, find_by_name},
        shared::errors::DomainError,
    },
    infrastructure::{
        geocoding::{Geocoder, PlaceQuery},
        http::{FetchState, FetchView},
    },
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::instrument;

/// Directory of cities for one country, loaded from a forward geocoding search.
pub struct CityDirectory {
    geocoder: Arc<dyn Geocoder>,
    query: PlaceQuery,
    cities: RwLock<FetchState<Vec<CityEntry>>>,
}

impl CityDirectory {
    pub fn new(geocoder: Arc<dyn Geocoder>, query: PlaceQuery) -> Self {
        Self {
            geocoder,
            query,
            cities: RwLock::new(FetchState::new()),
        }
    }

    /// Fetches the whole list and replaces the previous one.
    ///
    /// When loads overlap only the most recently started one is kept; an
    /// overtaken load returns `Ok(None)` whatever its own outcome was.
    #[instrument(skip(self), fields(query = %self.query.text))]
    pub async fn load_cities(&self) -> Result<Option<usize>, DomainError> {
        let ticket = self.cities.write().await.begin();

        let result = self
            .geocoder
            .search(&self.query)
            .await
            .map(|response| response.city_entries());
        let loaded = result.as_ref().map(Vec::len).map_err(Clone::clone);

        if !self.cities.write().await.settle(ticket, result) {
            tracing::debug!("city directory load overtaken by a newer one");
            return Ok(None);
        }
        match &loaded {
            Ok(count) => tracing::info!(cities = count, "city directory loaded"),
            Err(err) => tracing::error!(error = %err, "city directory load failed"),
        }
        loaded.map(Some)
    }

    pub async fn cities(&self) -> FetchView<Vec<CityOption>> {
        let guard = self.cities.read().await;
        let view = guard.view();
        FetchView {
            is_loading: view.is_loading,
            data: view
                .data
                .map(|list| list.into_iter().map(CityOption::from).collect()),
            error: view.error,
        }
    }

    /// Reverse-geocodes the entry named exactly `name`; any other name clears the details.
    #[instrument(skip(self))]
    pub async fn select_city(&self, name: &str) -> Result<CitySelection, DomainError> {
        let entry = {
            let guard = self.cities.read().await;
            guard
                .data()
                .and_then(|list| find_by_name(list, name))
                .cloned()
        };

        let Some(entry) = entry else {
            tracing::debug!("selection not in directory, clearing details");
            return Ok(CitySelection::cleared(name));
        };

        let address = self.geocoder.reverse(entry.coordinate()).await?.address();
        Ok(CitySelection::found(entry, address))
    }
}
