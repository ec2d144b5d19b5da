pub mod city;
pub mod location;
pub mod registration;
pub mod shared;
