pub mod error;
pub mod http;
pub mod nominatim;
pub mod overpass;
pub mod pois;
pub mod translate;
pub mod weather;

pub use error::FetchError;
pub use http::build_http_client;
pub use nominatim::NominatimClient;
pub use overpass::{OverpassClient, OverpassResponse, build_poi_query};
pub use pois::{MAX_POIS, find_pois};
pub use translate::TranslateClient;
pub use weather::WeatherClient;
