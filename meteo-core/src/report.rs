//! Human-readable report lines derived from a [`WeatherSnapshot`].

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::{
    codes,
    direction::cardinal,
    error::{ReportError, Result},
    number::rounded_units,
    snapshot::WeatherSnapshot,
};

pub const DEGREE_SIGN: char = '\u{00b0}';

/// Forecast lines printed by default (today plus four days).
pub const DEFAULT_FORECAST_DAYS: usize = 5;

/// Borrowing view that renders individual report lines.
///
/// All accessors are pure; calling them twice yields the same text.
#[derive(Debug, Clone, Copy)]
pub struct WeatherReportFormatter<'a> {
    snapshot: &'a WeatherSnapshot,
}

impl<'a> WeatherReportFormatter<'a> {
    pub fn new(snapshot: &'a WeatherSnapshot) -> Self {
        Self { snapshot }
    }

    /// Observation time as a 12-hour clock, e.g. `9:41 AM`.
    pub fn current_time(&self) -> Result<String> {
        let time = self.snapshot.current()?.time()?;
        twelve_hour("current.time", time)
    }

    /// `72° (feels like 69°)`
    pub fn temperature_line(&self) -> Result<String> {
        let current = self.snapshot.current()?;
        Ok(format!(
            "{}{DEGREE_SIGN} (feels like {}{DEGREE_SIGN})",
            rounded_units(current.temperature()?),
            rounded_units(current.apparent_temperature()?),
        ))
    }

    pub fn humidity_and_dewpoint_line(&self) -> Result<String> {
        let current = self.snapshot.current()?;
        Ok(format!(
            "Relative humidity is {}%, dew point is {}{DEGREE_SIGN}",
            current.relative_humidity()?,
            rounded_units(current.dew_point()?),
        ))
    }

    /// Weather code description for the current day/night state.
    pub fn conditions(&self) -> Result<&'static str> {
        let current = self.snapshot.current()?;
        Ok(codes::describe(current.weather_code()?, current.is_day()?))
    }

    pub fn cloud_cover_line(&self) -> Result<String> {
        Ok(format!("{}% cloud cover", self.snapshot.current()?.cloud_cover()?))
    }

    /// `Mainly Sunny, 20% cloud cover`
    pub fn conditions_line(&self) -> Result<String> {
        Ok(format!("{}, {}", self.conditions()?, self.cloud_cover_line()?))
    }

    /// `Wind: 8 mph (W), gusting to 16 mph`
    pub fn wind_line(&self) -> Result<String> {
        let current = self.snapshot.current()?;
        let direction = cardinal(current.wind_direction()?)?;
        Ok(format!(
            "Wind: {} mph ({direction}), gusting to {} mph",
            rounded_units(current.wind_speed()?),
            rounded_units(current.wind_gusts()?),
        ))
    }

    pub fn precipitation_line(&self) -> Result<String> {
        Ok(format!(
            "Precipitation probability is {}%",
            self.snapshot.current()?.precipitation_probability()?
        ))
    }

    pub fn sunrise_time(&self) -> Result<String> {
        twelve_hour("daily.sunrise[0]", self.snapshot.daily()?.sunrise(0)?)
    }

    pub fn sunset_time(&self) -> Result<String> {
        twelve_hour("daily.sunset[0]", self.snapshot.daily()?.sunset(0)?)
    }

    /// Today's low, `min: 60°`.
    pub fn daily_low(&self) -> Result<String> {
        let low = self.snapshot.daily()?.temperature_min(0)?;
        Ok(format!("min: {}{DEGREE_SIGN}", rounded_units(low)))
    }

    /// Today's high, `max: 80°`.
    pub fn daily_high(&self) -> Result<String> {
        let high = self.snapshot.daily()?.temperature_max(0)?;
        Ok(format!("max: {}{DEGREE_SIGN}", rounded_units(high)))
    }

    /// `min: 60° / max: 80°`
    pub fn daily_extremes_line(&self) -> Result<String> {
        Ok(format!("{} / {}", self.daily_low()?, self.daily_high()?))
    }

    /// One forecast line for `day` (0 = today), e.g. `Wed: 80°/60°, Light Rain (40% precip)`.
    ///
    /// Daily codes carry no day/night state, so paired descriptions always use the daytime text.
    pub fn forecast_line(&self, day: usize) -> Result<String> {
        let daily = self.snapshot.daily()?;

        let date = daily.date(day)?;
        let weekday = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map_err(|_| ReportError::InvalidTimestamp {
                field: format!("daily.time[{day}]"),
                value: date.to_string(),
            })?
            .format("%a");

        let high = rounded_units(daily.temperature_max(day)?);
        let low = rounded_units(daily.temperature_min(day)?);
        let description = codes::describe(daily.weather_code(day)?, true);
        let precip = daily.precipitation_probability_mean(day)?;

        Ok(format!(
            "{weekday}: {high}{DEGREE_SIGN}/{low}{DEGREE_SIGN}, {description} ({precip}% precip)"
        ))
    }

    /// Assemble the complete report under a `<location> @ <time>` header.
    pub fn report(&self, location: &str, forecast_days: usize) -> Result<Report> {
        let mut lines = vec![
            format!("{location} @ {}", self.current_time()?),
            indent(self.temperature_line()?),
            indent(self.conditions_line()?),
            indent(self.humidity_and_dewpoint_line()?),
            indent(self.wind_line()?),
            indent(self.precipitation_line()?),
            indent(SEPARATOR),
            indent(format!(
                "sunrise: {} / sunset: {}",
                self.sunrise_time()?,
                self.sunset_time()?
            )),
            indent(SEPARATOR),
        ];

        for day in 0..forecast_days {
            lines.push(indent(self.forecast_line(day)?));
        }

        Ok(Report { lines })
    }
}

const SEPARATOR: &str = "----";

fn indent(line: impl AsRef<str>) -> String {
    format!("  {}", line.as_ref())
}

/// Ordered report lines, ready for terminal display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    lines: Vec<String>,
}

impl Report {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines.join("\n"))
    }
}

/// Parse an Open-Meteo timestamp, keeping the local wall-clock time.
///
/// Accepts `2024-06-05T09:41`, `2024-06-05T09:41:00` and offset-carrying forms
/// such as `2024-06-05T09:41:00-04:00`.
fn parse_local(field: &str, value: &str) -> Result<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.naive_local());
    }
    if let Ok(dt) = DateTime::parse_from_str(value, "%Y-%m-%dT%H:%M%:z") {
        return Ok(dt.naive_local());
    }

    ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .ok_or_else(|| ReportError::InvalidTimestamp {
            field: field.to_string(),
            value: value.to_string(),
        })
}

fn twelve_hour(field: &str, value: &str) -> Result<String> {
    Ok(parse_local(field, value)?.format("%-I:%M %p").to_string())
}
