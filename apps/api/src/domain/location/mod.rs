pub mod entity;
pub mod geocode;
