use serde::Deserialize;
use std::collections::HashMap;

use super::FetchError;
use super::http::send_json;
use crate::domain::SearchArea;

const CONTEXT: &str = "POI fetch failed";

/// Upper bound on raw candidates requested from Overpass
pub const MAX_CANDIDATES: usize = 15;

/// Server-side query timeout, kept below the client ceiling
const QUERY_TIMEOUT_SECS: u32 = 25;

/// Tag filters unioned into a single POI query
pub const CATEGORY_FILTERS: [&str; 7] = [
    r#"["tourism"]"#,
    r#"["amenity"="restaurant"]"#,
    r#"["amenity"="cafe"]"#,
    r#"["historic"]"#,
    r#"["leisure"]"#,
    r#"["shop"="mall"]"#,
    r#"["amenity"="place_of_worship"]"#,
];

/// Raw Overpass API response
#[derive(Debug, Deserialize)]
pub struct OverpassResponse {
    #[serde(default)]
    pub elements: Vec<Element>,
}

/// A single node returned by the POI query
#[derive(Debug, Clone, Deserialize)]
pub struct Element {
    pub id: i64,
    pub lat: f64,
    pub lon: f64,
    /// Absent on untagged nodes
    #[serde(default)]
    pub tags: Option<HashMap<String, String>>,
}

/// Build the Overpass QL query for every POI category around the area.
pub fn build_poi_query(area: &SearchArea) -> String {
    let around = format!("(around:{},{},{})", area.radius, area.lat, area.lon);
    let predicates: String = CATEGORY_FILTERS
        .iter()
        .map(|filter| format!("  node{filter}{around};\n"))
        .collect();

    format!(
        "[out:json][timeout:{QUERY_TIMEOUT_SECS}];\n(\n{predicates});\nout body {MAX_CANDIDATES};"
    )
}

/// Client for an Overpass interpreter endpoint
#[derive(Debug, Clone)]
pub struct OverpassClient {
    http: reqwest::Client,
    url: String,
}

impl OverpassClient {
    pub fn new(http: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            http,
            url: url.into(),
        }
    }

    /// Fetch candidate POI nodes around the area, in Overpass response order.
    pub async fn fetch_pois(&self, area: &SearchArea) -> Result<OverpassResponse, FetchError> {
        let query = build_poi_query(area);
        tracing::debug!(%query, "querying overpass");
        self.execute(&query).await
    }

    async fn execute(&self, query: &str) -> Result<OverpassResponse, FetchError> {
        // Overpass expects form-encoded POST data: data=<query>
        let request = self.http.post(self.url.as_str()).form(&[("data", query)]);
        let response: OverpassResponse = send_json(request, CONTEXT).await?;
        tracing::debug!(elements = response.elements.len(), "overpass responded");
        Ok(response)
    }
}
