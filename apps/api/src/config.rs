//! Application configuration loading from environment variables.
//!
//! Configuration is read once at startup (after `dotenvy` has populated the
//! environment from an optional `.env` file). Provider API keys are never
//! embedded in source; they must be supplied through the environment.
//!
//! # Environment Variables
//!
//! ## Required Variables
//! - `OPENCAGE_API_KEY`: OpenCage geocoding API key
//!
//! ## Optional Variables
//! - `RUST_LOG`: Logging level (default: "info,whereabouts=debug,tower_http=debug")
//! - `HOST`: Server bind address (default: "0.0.0.0")
//! - `PORT`: Server port (default: 3000)
//! - `OPENCAGE_BASE_URL`: OpenCage endpoint (default: public v1 JSON endpoint)
//! - `GOOGLE_MAPS_API_KEY`: Google geocoding key, required when `LOCATION_PROVIDER=google`
//! - `GOOGLE_GEOCODE_BASE_URL`: Google endpoint (default: public JSON endpoint)
//! - `LOCATION_PROVIDER`: `opencage` or `google` (default: opencage)
//! - `CITY_DIRECTORY_QUERY`: Forward search text for the directory (default: "India")
//! - `CITY_DIRECTORY_COUNTRY`: ISO country code filter (default: "in")
//! - `CITY_DIRECTORY_LIMIT`: Maximum directory results, capped at 10000 (default: 10000)
//! - `FORM_SUBMIT_URL`: Absolute URL registrations are POSTed to (default: unset, not forwarded)
//! - `VALID_PHONE_PREFIXES`: Comma-separated phone code allow-list (default: empty)
//! - `ALLOWED_ORIGINS`: Comma-separated CORS origins for release builds (default: empty)
//! - `HTTP_USER_AGENT`: User agent for outbound requests
//! - `HTTP_TIMEOUT_SECONDS`: Outbound request timeout (default: none)

use crate::infrastructure::geocoding::{google, opencage, traits::MAX_PLACE_RESULTS};
use std::{fmt, str::FromStr, time::Duration};

/// Which provider backs reverse geocoding of the device position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LocationProvider {
    #[default]
    OpenCage,
    Google,
}

impl FromStr for LocationProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "opencage" => Ok(Self::OpenCage),
            "google" => Ok(Self::Google),
            other => Err(format!("unknown provider '{}'", other)),
        }
    }
}

impl fmt::Display for LocationProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OpenCage => write!(f, "opencage"),
            Self::Google => write!(f, "google"),
        }
    }
}

/// Complete server configuration loaded from environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address
    pub host: String,

    /// Server port
    pub port: u16,

    /// OpenCage API key (used by the city directory, and by location unless Google is selected)
    pub opencage_api_key: String,

    pub opencage_base_url: String,

    /// Google geocoding API key
    pub google_api_key: Option<String>,

    pub google_base_url: String,

    /// Provider for reverse geocoding the device position
    pub location_provider: LocationProvider,

    /// Forward search text the city directory is built from
    pub city_directory_query: String,

    /// Country filter for the city directory
    pub city_directory_country: String,

    /// Maximum number of directory results requested
    pub city_directory_limit: u32,

    /// Where validated registrations are POSTed; `None` disables forwarding
    pub form_submit_url: Option<String>,

    /// Allow-list for the phone `code` field
    pub valid_phone_prefixes: Vec<String>,

    /// CORS origins accepted in release builds
    pub allowed_origins: Vec<String>,

    /// User agent for outbound HTTP requests
    pub http_user_agent: Option<String>,

    /// Timeout applied to outbound HTTP requests
    pub http_timeout: Option<Duration>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing, a value cannot be
    /// parsed, or the selected location provider has no API key.
    pub fn from_env() -> anyhow::Result<Self> {
        let config = Self {
            host: env_or("HOST", "0.0.0.0".to_string())?,
            port: env_or("PORT", 3000)?,
            opencage_api_key: env_required("OPENCAGE_API_KEY")?,
            opencage_base_url: env_or("OPENCAGE_BASE_URL", opencage::DEFAULT_BASE_URL.to_string())?,
            google_api_key: env_optional("GOOGLE_MAPS_API_KEY"),
            google_base_url: env_or(
                "GOOGLE_GEOCODE_BASE_URL",
                google::DEFAULT_BASE_URL.to_string(),
            )?,
            location_provider: env_or("LOCATION_PROVIDER", LocationProvider::default())?,
            city_directory_query: env_or("CITY_DIRECTORY_QUERY", "India".to_string())?,
            city_directory_country: env_or("CITY_DIRECTORY_COUNTRY", "in".to_string())?,
            city_directory_limit: env_or("CITY_DIRECTORY_LIMIT", MAX_PLACE_RESULTS)?
                .min(MAX_PLACE_RESULTS),
            form_submit_url: env_optional("FORM_SUBMIT_URL"),
            valid_phone_prefixes: split_list(&std::env::var("VALID_PHONE_PREFIXES").unwrap_or_default()),
            allowed_origins: split_list(&std::env::var("ALLOWED_ORIGINS").unwrap_or_default()),
            http_user_agent: env_optional("HTTP_USER_AGENT"),
            http_timeout: env_optional("HTTP_TIMEOUT_SECONDS")
                .map(|v| {
                    v.parse::<u64>()
                        .map(Duration::from_secs)
                        .map_err(|e| anyhow::anyhow!("Failed to parse HTTP_TIMEOUT_SECONDS: {}", e))
                })
                .transpose()?,
        };
        config.check()?;
        Ok(config)
    }

    /// Cross-field checks that cannot be expressed per variable.
    pub fn check(&self) -> anyhow::Result<()> {
        if self.location_provider == LocationProvider::Google && self.google_api_key.is_none() {
            anyhow::bail!("LOCATION_PROVIDER=google requires GOOGLE_MAPS_API_KEY");
        }
        Ok(())
    }
}

/// Load a required environment variable.
///
/// # Errors
///
/// Returns an error if the variable is not set.
fn env_required(key: &str) -> anyhow::Result<String> {
    std::env::var(key).map_err(|_| anyhow::anyhow!("Missing required environment variable: {}", key))
}

/// Load an environment variable, treating blank values as unset.
fn env_optional(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Load an environment variable with a default value.
///
/// # Errors
///
/// Returns an error if the variable is set but cannot be parsed.
fn env_or<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(val) => val
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", key, e)),
        Err(_) => Ok(default),
    }
}

/// Comma-separated list, trimmed, empty items dropped.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
