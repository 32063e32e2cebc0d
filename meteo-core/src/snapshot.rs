//! Parsed Open-Meteo forecast payload.
//!
//! Every field is optional at parse time so that a partial payload can still be
//! loaded; reading an absent value yields [`ReportError::MissingField`] with the
//! JSON path of the value, e.g. `daily.temperature_2m_max[3]`.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ReportError, Result};

/// One forecast API response. Read-only once constructed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub timezone: Option<String>,
    pub utc_offset_seconds: Option<i32>,
    current: Option<CurrentConditions>,
    daily: Option<DailyForecast>,
}

impl WeatherSnapshot {
    /// Parse the raw response body.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn current(&self) -> Result<&CurrentConditions> {
        self.current
            .as_ref()
            .ok_or_else(|| ReportError::MissingField("current".to_string()))
    }

    pub fn daily(&self) -> Result<&DailyForecast> {
        self.daily
            .as_ref()
            .ok_or_else(|| ReportError::MissingField("daily".to_string()))
    }
}

impl FromStr for WeatherSnapshot {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_json(s)
    }
}

/// The `current` block of the response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CurrentConditions {
    time: Option<String>,
    is_day: Option<i64>,
    temperature_2m: Option<f64>,
    apparent_temperature: Option<f64>,
    relative_humidity_2m: Option<f64>,
    dew_point_2m: Option<f64>,
    cloud_cover: Option<f64>,
    wind_speed_10m: Option<f64>,
    wind_gusts_10m: Option<f64>,
    wind_direction_10m: Option<f64>,
    precipitation_probability: Option<f64>,
    weather_code: Option<i64>,
}

fn required<T: Copy>(value: Option<T>, path: &str) -> Result<T> {
    value.ok_or_else(|| ReportError::MissingField(path.to_string()))
}

impl CurrentConditions {
    pub fn time(&self) -> Result<&str> {
        self.time
            .as_deref()
            .ok_or_else(|| ReportError::MissingField("current.time".to_string()))
    }

    /// Open-Meteo encodes the flag as `1` (day) or `0` (night).
    pub fn is_day(&self) -> Result<bool> {
        required(self.is_day, "current.is_day").map(|flag| flag == 1)
    }

    pub fn temperature(&self) -> Result<f64> {
        required(self.temperature_2m, "current.temperature_2m")
    }

    pub fn apparent_temperature(&self) -> Result<f64> {
        required(self.apparent_temperature, "current.apparent_temperature")
    }

    pub fn relative_humidity(&self) -> Result<f64> {
        required(self.relative_humidity_2m, "current.relative_humidity_2m")
    }

    pub fn dew_point(&self) -> Result<f64> {
        required(self.dew_point_2m, "current.dew_point_2m")
    }

    pub fn cloud_cover(&self) -> Result<f64> {
        required(self.cloud_cover, "current.cloud_cover")
    }

    pub fn wind_speed(&self) -> Result<f64> {
        required(self.wind_speed_10m, "current.wind_speed_10m")
    }

    pub fn wind_gusts(&self) -> Result<f64> {
        required(self.wind_gusts_10m, "current.wind_gusts_10m")
    }

    pub fn wind_direction(&self) -> Result<f64> {
        required(self.wind_direction_10m, "current.wind_direction_10m")
    }

    pub fn precipitation_probability(&self) -> Result<f64> {
        required(self.precipitation_probability, "current.precipitation_probability")
    }

    pub fn weather_code(&self) -> Result<i64> {
        required(self.weather_code, "current.weather_code")
    }
}

/// The `daily` block: parallel arrays indexed by day, 0 being today.
///
/// Open-Meteo emits `null` for days it cannot compute, hence `Option` elements.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DailyForecast {
    time: Option<Vec<Option<String>>>,
    temperature_2m_max: Option<Vec<Option<f64>>>,
    temperature_2m_min: Option<Vec<Option<f64>>>,
    sunrise: Option<Vec<Option<String>>>,
    sunset: Option<Vec<Option<String>>>,
    precipitation_probability_mean: Option<Vec<Option<f64>>>,
    weather_code: Option<Vec<Option<i64>>>,
}

fn element<'a, T>(values: &'a Option<Vec<Option<T>>>, name: &str, day: usize) -> Result<&'a T> {
    let values = values
        .as_ref()
        .ok_or_else(|| ReportError::MissingField(format!("daily.{name}")))?;

    values
        .get(day)
        .and_then(Option::as_ref)
        .ok_or_else(|| ReportError::MissingField(format!("daily.{name}[{day}]")))
}

impl DailyForecast {
    /// Number of days in the `time` array.
    pub fn len(&self) -> usize {
        self.time.as_ref().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Calendar date of `day`, as `YYYY-MM-DD`.
    pub fn date(&self, day: usize) -> Result<&str> {
        element(&self.time, "time", day).map(String::as_str)
    }

    pub fn temperature_max(&self, day: usize) -> Result<f64> {
        element(&self.temperature_2m_max, "temperature_2m_max", day).copied()
    }

    pub fn temperature_min(&self, day: usize) -> Result<f64> {
        element(&self.temperature_2m_min, "temperature_2m_min", day).copied()
    }

    pub fn sunrise(&self, day: usize) -> Result<&str> {
        element(&self.sunrise, "sunrise", day).map(String::as_str)
    }

    pub fn sunset(&self, day: usize) -> Result<&str> {
        element(&self.sunset, "sunset", day).map(String::as_str)
    }

    pub fn precipitation_probability_mean(&self, day: usize) -> Result<f64> {
        element(
            &self.precipitation_probability_mean,
            "precipitation_probability_mean",
            day,
        )
        .copied()
    }

    pub fn weather_code(&self, day: usize) -> Result<i64> {
        element(&self.weather_code, "weather_code", day).copied()
    }
}
