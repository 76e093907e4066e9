pub mod location;
pub mod poi;
pub mod translation;
pub mod weather;

pub use location::GeocodeResult;
pub use poi::{DEFAULT_RADIUS, NormalizedPoi, PoiResponse, SearchArea};
pub use translation::{TranslateRequest, Translation};
pub use weather::WeatherReport;
