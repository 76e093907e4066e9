use super::{FetchError, OverpassClient};
use crate::domain::{PoiResponse, SearchArea};
use crate::osm::parse_pois;

/// Most POIs returned for one search
pub const MAX_POIS: usize = 5;

/// Query Overpass around the area and normalize the first results.
///
/// All or nothing: an upstream failure yields no partial POIs.
pub async fn find_pois(
    client: &OverpassClient,
    area: &SearchArea,
) -> Result<PoiResponse, FetchError> {
    let response = client.fetch_pois(area).await?;
    let pois = parse_pois(response, MAX_POIS);
    tracing::debug!(count = pois.len(), radius = area.radius, "normalized pois");
    Ok(PoiResponse::new(pois))
}
