pub mod google;
pub mod opencage;
pub mod traits;

pub use google::GoogleGeocoder;
pub use opencage::OpenCageGeocoder;
pub use traits::{Geocoder, PlaceQuery};
