use serde::Deserialize;

use super::FetchError;
use super::http::send_json;
use crate::domain::GeocodeResult;

const CONTEXT: &str = "Geocoding failed";

#[derive(Debug, Deserialize)]
struct NominatimResult {
    lat: String,
    lon: String,
    display_name: String,
}

/// Client for the Nominatim search endpoint.
///
/// Every query is scoped to one country by appending it to the search text.
#[derive(Debug, Clone)]
pub struct NominatimClient {
    http: reqwest::Client,
    url: String,
    country: String,
}

impl NominatimClient {
    pub fn new(http: reqwest::Client, url: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            http,
            url: url.into(),
            country: country.into(),
        }
    }

    /// Geocode a place name to the best matching coordinates.
    ///
    /// # Returns
    /// * `Ok(GeocodeResult)` - First match, with `searched_city` echoing `place`
    /// * `Err(FetchError::NotFound)` - Nominatim returned no match
    /// * `Err(FetchError::SourceUnavailable)` - Network, status or parse failure
    pub async fn geocode(&self, place: &str) -> Result<GeocodeResult, FetchError> {
        let query = format!("{},{}", place, self.country);

        let request = self.http.get(self.url.as_str()).query(&[
            ("q", query.as_str()),
            ("format", "json"),
            ("limit", "1"),
        ]);
        let results: Vec<NominatimResult> = send_json(request, CONTEXT).await?;

        let result = results.into_iter().next().ok_or_else(|| {
            FetchError::NotFound(format!("Location not found in {}", self.country))
        })?;

        let lat: f64 = result
            .lat
            .parse()
            .map_err(|e| FetchError::unavailable(CONTEXT, format!("invalid latitude: {e}")))?;
        let lon: f64 = result
            .lon
            .parse()
            .map_err(|e| FetchError::unavailable(CONTEXT, format!("invalid longitude: {e}")))?;

        tracing::debug!(place, lat, lon, "geocoded");

        Ok(GeocodeResult {
            lat,
            lon,
            display_name: result.display_name,
            searched_city: place.to_string(),
        })
    }
}
