pub mod cities;
pub mod health;
pub mod location;
pub mod registration;
