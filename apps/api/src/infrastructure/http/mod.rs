pub mod client;
pub mod fetch_state;

pub use client::HttpFetcher;
pub use fetch_state::{FetchState, FetchView, Ticket};
