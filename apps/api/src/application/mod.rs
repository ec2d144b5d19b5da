pub mod city_directory;
pub mod register;
pub mod resolve_location;
