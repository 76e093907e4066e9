mod error;
mod handlers;

pub use error::ApiError;

use axum::{
    Router,
    http::{Method, header},
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::api::{
    NominatimClient, OverpassClient, TranslateClient, WeatherClient, build_http_client,
};
use crate::config::UpstreamConfig;

/// Upstream clients shared by every request
#[derive(Debug, Clone)]
pub struct AppState {
    pub overpass: OverpassClient,
    pub nominatim: NominatimClient,
    pub weather: WeatherClient,
    pub translate: TranslateClient,
}

impl AppState {
    /// Build every client over a single connection pool.
    pub fn from_config(config: &UpstreamConfig) -> Result<Self, reqwest::Error> {
        let http = build_http_client(config)?;
        Ok(Self {
            overpass: OverpassClient::new(http.clone(), &config.overpass_url),
            nominatim: NominatimClient::new(http.clone(), &config.nominatim_url, &config.country),
            weather: WeatherClient::new(
                http.clone(),
                &config.openweather_url,
                config.openweather_api_key.clone(),
            ),
            translate: TranslateClient::new(http, &config.translate_url),
        })
    }
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::health))
        .route("/api/geocode", get(handlers::geocode))
        .route("/api/weather", get(handlers::weather))
        .route("/api/pois", post(handlers::pois))
        .route("/api/translate", post(handlers::translate))
        .route("/api/chat", post(handlers::chat))
        .layer(build_cors())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
