use axum::{
    Json,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
};
use serde::{Deserialize, Serialize};

use super::{ApiError, AppState};
use crate::api::find_pois;
use crate::chat::{self, ChatRequest, ChatResponse};
use crate::domain::{
    GeocodeResult, PoiResponse, SearchArea, TranslateRequest, Translation, WeatherReport,
};

#[derive(Debug, Serialize)]
pub(super) struct HealthStatus {
    status: &'static str,
    message: &'static str,
    version: &'static str,
}

pub(super) async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        message: "POI Finder API is running!",
        version: env!("CARGO_PKG_VERSION"),
    })
}

#[derive(Debug, Deserialize)]
pub(super) struct GeocodeParams {
    q: String,
}

pub(super) async fn geocode(
    State(state): State<AppState>,
    params: Result<Query<GeocodeParams>, QueryRejection>,
) -> Result<Json<GeocodeResult>, ApiError> {
    let Query(params) = params?;
    let result = state.nominatim.geocode(&params.q).await?;
    Ok(Json(result))
}

#[derive(Debug, Deserialize)]
pub(super) struct WeatherParams {
    lat: f64,
    lon: f64,
    #[serde(default)]
    city: String,
}

pub(super) async fn weather(
    State(state): State<AppState>,
    params: Result<Query<WeatherParams>, QueryRejection>,
) -> Result<Json<WeatherReport>, ApiError> {
    let Query(params) = params?;
    let report = state
        .weather
        .current(params.lat, params.lon, &params.city)
        .await?;
    Ok(Json(report))
}

pub(super) async fn pois(
    State(state): State<AppState>,
    area: Result<Json<SearchArea>, JsonRejection>,
) -> Result<Json<PoiResponse>, ApiError> {
    let Json(area) = area?;
    let response = find_pois(&state.overpass, &area).await?;
    Ok(Json(response))
}

pub(super) async fn translate(
    State(state): State<AppState>,
    request: Result<Json<TranslateRequest>, JsonRejection>,
) -> Result<Json<Translation>, ApiError> {
    let Json(request) = request?;
    let translation = state.translate.translate(&request).await?;
    Ok(Json(translation))
}

pub(super) async fn chat(
    request: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let Json(request) = request?;
    Ok(Json(ChatResponse {
        response: chat::reply(&request.message).to_string(),
    }))
}
