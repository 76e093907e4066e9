use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

/// Default search radius in meters
pub const DEFAULT_RADIUS: i64 = 3000;

fn default_radius() -> i64 {
    DEFAULT_RADIUS
}

/// A JSON number or numeric string sent by a client
#[derive(Deserialize)]
#[serde(untagged)]
enum LooseNumber {
    Int(i64),
    Float(f64),
    Text(String),
}

fn deserialize_coordinate<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = match LooseNumber::deserialize(deserializer)? {
        LooseNumber::Int(n) => n as f64,
        LooseNumber::Float(f) => f,
        LooseNumber::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| de::Error::custom(format!("invalid coordinate \"{s}\"")))?,
    };
    if value.is_finite() {
        Ok(value)
    } else {
        Err(de::Error::custom("coordinate must be finite"))
    }
}

fn deserialize_radius<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match LooseNumber::deserialize(deserializer)? {
        LooseNumber::Int(n) => Ok(n),
        LooseNumber::Float(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64 => {
            Ok(f as i64)
        }
        LooseNumber::Float(f) => Err(de::Error::custom(format!("radius {f} is not a whole number"))),
        LooseNumber::Text(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| de::Error::custom(format!("invalid radius \"{s}\""))),
    }
}

/// A circular search area around a point.
///
/// Numbers may arrive as integers, floats or numeric strings. The radius must
/// be a whole number but is otherwise passed to Overpass unmodified, including
/// zero or negative values, which the upstream service is left to reject.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct SearchArea {
    /// Latitude in degrees (WGS84)
    #[serde(deserialize_with = "deserialize_coordinate")]
    pub lat: f64,
    /// Longitude in degrees (WGS84)
    #[serde(deserialize_with = "deserialize_coordinate")]
    pub lon: f64,
    /// Radius in meters
    #[serde(default = "default_radius", deserialize_with = "deserialize_radius")]
    pub radius: i64,
}

impl SearchArea {
    pub fn new(lat: f64, lon: f64, radius: i64) -> Self {
        Self { lat, lon, radius }
    }
}

/// A point of interest with every field filled in.
///
/// Fields with no usable source tag are empty strings, never absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedPoi {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub category: String,
    /// (lat, lon) exactly as returned by Overpass
    pub coordinates: (f64, f64),
    pub description: String,
    pub address: String,
    pub phone: String,
    pub website: String,
    pub opening_hours: String,
    pub cuisine: String,
    pub rating: String,
    pub wikipedia: String,
    pub email: String,
}

/// Response envelope for a POI search
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PoiResponse {
    pub pois: Vec<NormalizedPoi>,
}

impl PoiResponse {
    pub fn new(pois: Vec<NormalizedPoi>) -> Self {
        Self { pois }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_area_defaults_radius() {
        let area: SearchArea = serde_json::from_str(r#"{"lat": 21.0285, "lon": 105.8542}"#).unwrap();
        assert_eq!(area.radius, 3000);

        let area: SearchArea =
            serde_json::from_str(r#"{"lat": 21.0285, "lon": 105.8542, "radius": -5}"#).unwrap();
        assert_eq!(area.radius, -5);
    }

    #[test]
    fn test_search_area_coerces_numbers() {
        let area: SearchArea =
            serde_json::from_str(r#"{"lat": 21, "lon": 105.8, "radius": 3000.0}"#).unwrap();
        assert_eq!(area, SearchArea::new(21.0, 105.8, 3000));

        let area: SearchArea =
            serde_json::from_str(r#"{"lat": "21.0285", "lon": " 105.8542 ", "radius": "3000"}"#)
                .unwrap();
        assert_eq!(area, SearchArea::new(21.0285, 105.8542, 3000));
    }

    #[test]
    fn test_search_area_rejects_non_numbers() {
        for body in [
            r#"{"lat": 21.0, "lon": 105.8, "radius": 3000.5}"#,
            r#"{"lat": 21.0, "lon": 105.8, "radius": "wide"}"#,
            r#"{"lat": 21.0, "lon": 105.8, "radius": true}"#,
            r#"{"lat": "north", "lon": 105.8}"#,
            r#"{"lat": "NaN", "lon": 105.8}"#,
            r#"{"lat": null, "lon": 105.8}"#,
            r#"{"lon": 105.8}"#,
        ] {
            assert!(
                serde_json::from_str::<SearchArea>(body).is_err(),
                "accepted {body}"
            );
        }
    }

    #[test]
    fn test_poi_wire_names() {
        let poi = NormalizedPoi {
            id: 7,
            name: "Hoan Kiem Lake".to_string(),
            category: "attraction".to_string(),
            coordinates: (21.0287, 105.8524),
            description: String::new(),
            address: String::new(),
            phone: String::new(),
            website: String::new(),
            opening_hours: "24/7".to_string(),
            cuisine: String::new(),
            rating: String::new(),
            wikipedia: String::new(),
            email: String::new(),
        };

        let json = serde_json::to_value(PoiResponse::new(vec![poi])).unwrap();
        let entry = &json["pois"][0];
        assert_eq!(entry["type"], "attraction");
        assert_eq!(entry["openingHours"], "24/7");
        assert_eq!(entry["coordinates"][0], 21.0287);
        assert_eq!(entry["coordinates"][1], 105.8524);
        assert_eq!(entry["email"], "");
        assert!(entry.get("category").is_none());
    }
}
