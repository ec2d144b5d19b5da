pub mod geocoding;
pub mod geolocation;
pub mod http;
pub mod submission;
