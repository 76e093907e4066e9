use serde::Serialize;

/// Current conditions at a coordinate.
///
/// Temperatures are whole degrees Celsius.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherReport {
    pub temp: i64,
    pub feels_like: i64,
    pub description: String,
    pub icon: String,
    pub humidity: i64,
    pub wind_speed: f64,
    pub pressure: i64,
    pub temp_min: i64,
    pub temp_max: i64,
    pub city: String,
}
