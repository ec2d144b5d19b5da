use crate::{
    application::{city_directory::use_case::CityDirectory, register::use_case::RegisterUseCase},
    config::{Config, LocationProvider},
    infrastructure::{
        geocoding::{Geocoder, GoogleGeocoder, OpenCageGeocoder, PlaceQuery},
        http::HttpFetcher,
        submission::{FormSubmitter, HttpFormSubmitter},
    },
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub location_geocoder: Arc<dyn Geocoder>,
    pub city_directory: Arc<CityDirectory>,
    pub registration: Arc<RegisterUseCase>,
}

impl AppState {
    /// Wires the production providers described by `config`.
    ///
    /// The city directory starts out loading; callers decide when to run
    /// [`CityDirectory::load_cities`].
    pub fn from_config(config: Config) -> anyhow::Result<Self> {
        let fetcher = HttpFetcher::new(config.http_user_agent.clone(), config.http_timeout)?;

        let opencage: Arc<dyn Geocoder> = Arc::new(OpenCageGeocoder::new(
            fetcher.clone(),
            config.opencage_base_url.clone(),
            config.opencage_api_key.clone(),
        ));

        let location_geocoder: Arc<dyn Geocoder> = match config.location_provider {
            LocationProvider::OpenCage => opencage.clone(),
            LocationProvider::Google => {
                let key = config
                    .google_api_key
                    .clone()
                    .ok_or_else(|| anyhow::anyhow!("GOOGLE_MAPS_API_KEY is not set"))?;
                Arc::new(GoogleGeocoder::new(
                    fetcher.clone(),
                    config.google_base_url.clone(),
                    key,
                ))
            }
        };

        let city_directory = Arc::new(CityDirectory::new(
            opencage,
            PlaceQuery::new(
                config.city_directory_query.clone(),
                Some(config.city_directory_country.clone()),
                config.city_directory_limit,
            ),
        ));

        let submitter = config.form_submit_url.as_ref().map(|url| {
            Arc::new(HttpFormSubmitter::new(fetcher.clone(), url.clone())) as Arc<dyn FormSubmitter>
        });
        let registration = Arc::new(RegisterUseCase::new(
            submitter,
            config.valid_phone_prefixes.clone(),
        ));

        Ok(Self {
            config,
            location_geocoder,
            city_directory,
            registration,
        })
    }
}
