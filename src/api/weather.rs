use serde::Deserialize;

use super::FetchError;
use super::http::send_json;
use crate::domain::WeatherReport;

const CONTEXT: &str = "Weather fetch failed";

#[derive(Debug, Deserialize)]
struct CurrentWeather {
    main: MainReadings,
    weather: Vec<Condition>,
    wind: Wind,
    #[serde(default)]
    name: String,
}

#[derive(Debug, Deserialize)]
struct MainReadings {
    temp: f64,
    feels_like: f64,
    temp_min: f64,
    temp_max: f64,
    humidity: i64,
    pressure: i64,
}

#[derive(Debug, Deserialize)]
struct Condition {
    description: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct Wind {
    speed: f64,
}

/// Whole degrees, halves rounded to even
fn whole_degrees(value: f64) -> i64 {
    value.round_ties_even() as i64
}

impl CurrentWeather {
    fn into_report(self, city: &str) -> Result<WeatherReport, FetchError> {
        let condition = self
            .weather
            .into_iter()
            .next()
            .ok_or_else(|| FetchError::unavailable(CONTEXT, "response has no weather conditions"))?;

        let city = if city.is_empty() {
            self.name
        } else {
            city.to_string()
        };

        Ok(WeatherReport {
            temp: whole_degrees(self.main.temp),
            feels_like: whole_degrees(self.main.feels_like),
            description: condition.description,
            icon: condition.icon,
            humidity: self.main.humidity,
            wind_speed: self.wind.speed,
            pressure: self.main.pressure,
            temp_min: whole_degrees(self.main.temp_min),
            temp_max: whole_degrees(self.main.temp_max),
            city,
        })
    }
}

/// Client for the OpenWeather current conditions endpoint
#[derive(Debug, Clone)]
pub struct WeatherClient {
    http: reqwest::Client,
    url: String,
    api_key: Option<String>,
}

impl WeatherClient {
    pub fn new(http: reqwest::Client, url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            http,
            url: url.into(),
            api_key: api_key.filter(|k| !k.is_empty()),
        }
    }

    /// Current conditions at (lat, lon) in metric units.
    ///
    /// `city` replaces the upstream station name in the report when non-empty.
    pub async fn current(&self, lat: f64, lon: f64, city: &str) -> Result<WeatherReport, FetchError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(FetchError::MissingApiKey("OpenWeather"))?;

        let request = self.http.get(self.url.as_str()).query(&[
            ("lat", lat.to_string().as_str()),
            ("lon", lon.to_string().as_str()),
            ("units", "metric"),
            ("appid", api_key),
        ]);
        let weather: CurrentWeather = send_json(request, CONTEXT).await?;
        weather.into_report(city)
    }
}
