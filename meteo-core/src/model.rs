use serde::{Deserialize, Serialize};

/// Variables requested in the `current` block.
pub const CURRENT_VARIABLES: &[&str] = &[
    "is_day",
    "temperature_2m",
    "apparent_temperature",
    "relative_humidity_2m",
    "dew_point_2m",
    "cloud_cover",
    "wind_speed_10m",
    "wind_gusts_10m",
    "wind_direction_10m",
    "precipitation",
    "snowfall",
    "precipitation_probability",
    "rain",
    "showers",
    "weather_code",
    "snow_depth",
    "visibility",
];

/// Variables requested in the `daily` block.
pub const DAILY_VARIABLES: &[&str] = &[
    "temperature_2m_max",
    "temperature_2m_min",
    "sunrise",
    "sunset",
    "rain_sum",
    "snowfall_sum",
    "precipitation_probability_mean",
    "weather_code",
];

/// Point and timezone for a forecast lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastRequest {
    pub latitude: f64,
    pub longitude: f64,
    /// IANA identifier, e.g. `America/New_York`. Passed through unvalidated.
    pub timezone: String,
}

impl ForecastRequest {
    pub fn new(latitude: f64, longitude: f64, timezone: impl Into<String>) -> Self {
        Self {
            latitude,
            longitude,
            timezone: timezone.into(),
        }
    }

    /// Query string pairs for the Open-Meteo `/forecast` endpoint.
    ///
    /// Units are fixed to Fahrenheit and mph; the report assumes them.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("latitude", self.latitude.to_string()),
            ("longitude", self.longitude.to_string()),
            ("temperature_unit", "fahrenheit".to_string()),
            ("wind_speed_unit", "mph".to_string()),
            ("timezone", self.timezone.clone()),
            ("current", CURRENT_VARIABLES.join(",")),
            ("daily", DAILY_VARIABLES.join(",")),
        ]
    }
}
