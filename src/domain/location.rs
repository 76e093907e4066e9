use serde::Serialize;

/// A geocoded place name
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeocodeResult {
    pub lat: f64,
    pub lon: f64,
    pub display_name: String,
    /// The query text as the caller sent it
    pub searched_city: String,
}
