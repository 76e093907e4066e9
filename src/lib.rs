//! poi-finder - Points of interest, geocoding, weather and translation API backed by OpenStreetMap

pub mod api;
pub mod chat;
pub mod config;
pub mod domain;
pub mod osm;
pub mod server;

pub use api::{FetchError, find_pois};
