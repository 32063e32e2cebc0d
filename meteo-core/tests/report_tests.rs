//! End-to-end formatting from literal Open-Meteo payloads.

use meteo_core::{ReportError, WeatherReportFormatter, WeatherSnapshot};

fn sample_payload() -> serde_json::Value {
    serde_json::json!({
        "latitude": 39.61,
        "longitude": -84.55,
        "utc_offset_seconds": -14400,
        "timezone": "America/New_York",
        "current": {
            "time": "2024-06-04T09:45",
            "interval": 900,
            "is_day": 1,
            "temperature_2m": 71.6,
            "apparent_temperature": 69.4,
            "relative_humidity_2m": 55,
            "dew_point_2m": 54.3,
            "cloud_cover": 20,
            "wind_speed_10m": 8.2,
            "wind_gusts_10m": 15.9,
            "wind_direction_10m": 270,
            "precipitation": 0.0,
            "precipitation_probability": 10,
            "weather_code": 1,
            "visibility": 80000.0
        },
        "daily": {
            "time": ["2024-06-04", "2024-06-05", "2024-06-06", "2024-06-07", "2024-06-08"],
            "temperature_2m_max": [78.4, 80.0, 76.1, 72.5, 69.9],
            "temperature_2m_min": [58.6, 60.0, 61.2, 55.5, 50.4],
            "sunrise": ["2024-06-04T06:12", "2024-06-05T06:12", "2024-06-06T06:11", "2024-06-07T06:11", "2024-06-08T06:11"],
            "sunset": ["2024-06-04T21:04", "2024-06-05T21:05", "2024-06-06T21:05", "2024-06-07T21:06", "2024-06-08T21:07"],
            "precipitation_probability_mean": [12, 40, 65, 5, 0],
            "weather_code": [2, 61, 95, 3, 0]
        }
    })
}

fn sample_snapshot() -> WeatherSnapshot {
    WeatherSnapshot::from_json(&sample_payload().to_string()).expect("sample payload must parse")
}

#[test]
fn current_conditions_lines() {
    let snapshot = sample_snapshot();
    let fmt = WeatherReportFormatter::new(&snapshot);

    assert_eq!(fmt.current_time().unwrap(), "9:45 AM");
    assert_eq!(fmt.temperature_line().unwrap(), "72° (feels like 69°)");
    assert_eq!(fmt.conditions_line().unwrap(), "Mainly Sunny, 20% cloud cover");
    assert_eq!(
        fmt.humidity_and_dewpoint_line().unwrap(),
        "Relative humidity is 55%, dew point is 54°"
    );
    assert_eq!(fmt.wind_line().unwrap(), "Wind: 8 mph (W), gusting to 16 mph");
    assert_eq!(fmt.precipitation_line().unwrap(), "Precipitation probability is 10%");
}

#[test]
fn sun_times_and_extremes_come_from_today() {
    let snapshot = sample_snapshot();
    let fmt = WeatherReportFormatter::new(&snapshot);

    assert_eq!(fmt.sunrise_time().unwrap(), "6:12 AM");
    assert_eq!(fmt.sunset_time().unwrap(), "9:04 PM");
    assert_eq!(fmt.daily_extremes_line().unwrap(), "min: 59° / max: 78°");
}

#[test]
fn forecast_lines() {
    let snapshot = sample_snapshot();
    let fmt = WeatherReportFormatter::new(&snapshot);

    assert_eq!(fmt.forecast_line(0).unwrap(), "Tue: 78°/59°, Partly Cloudy (12% precip)");
    assert_eq!(fmt.forecast_line(1).unwrap(), "Wed: 80°/60°, Light Rain (40% precip)");
    assert_eq!(fmt.forecast_line(2).unwrap(), "Thu: 76°/61°, Thunderstorm (65% precip)");
    assert_eq!(fmt.forecast_line(3).unwrap(), "Fri: 72°/56°, Cloudy (5% precip)");
    assert_eq!(fmt.forecast_line(4).unwrap(), "Sat: 70°/50°, Sunny (0% precip)");
}

#[test]
fn full_report_layout() {
    let snapshot = sample_snapshot();
    let report = WeatherReportFormatter::new(&snapshot)
        .report("Butler County, 45011", 5)
        .unwrap();

    let expected = [
        "Butler County, 45011 @ 9:45 AM",
        "  72° (feels like 69°)",
        "  Mainly Sunny, 20% cloud cover",
        "  Relative humidity is 55%, dew point is 54°",
        "  Wind: 8 mph (W), gusting to 16 mph",
        "  Precipitation probability is 10%",
        "  ----",
        "  sunrise: 6:12 AM / sunset: 9:04 PM",
        "  ----",
        "  Tue: 78°/59°, Partly Cloudy (12% precip)",
        "  Wed: 80°/60°, Light Rain (40% precip)",
        "  Thu: 76°/61°, Thunderstorm (65% precip)",
        "  Fri: 72°/56°, Cloudy (5% precip)",
        "  Sat: 70°/50°, Sunny (0% precip)",
    ];
    assert_eq!(report.lines(), expected);
    assert_eq!(report.to_string(), expected.join("\n"));
}

#[test]
fn formatting_is_repeatable() {
    let snapshot = sample_snapshot();
    let fmt = WeatherReportFormatter::new(&snapshot);

    let first = fmt.report("Here", 5).unwrap();
    let second = fmt.report("Here", 5).unwrap();
    assert_eq!(first, second);
}

#[test]
fn report_asking_for_too_many_days_fails() {
    let snapshot = sample_snapshot();
    let err = WeatherReportFormatter::new(&snapshot)
        .report("Here", 6)
        .unwrap_err();

    match err {
        ReportError::MissingField(path) => assert_eq!(path, "daily.time[5]"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn nighttime_payload_uses_night_text() {
    let mut payload = sample_payload();
    payload["current"]["is_day"] = serde_json::json!(0);
    payload["current"]["weather_code"] = serde_json::json!(0);

    let snapshot = WeatherSnapshot::from_json(&payload.to_string()).unwrap();
    let fmt = WeatherReportFormatter::new(&snapshot);

    assert_eq!(fmt.conditions_line().unwrap(), "Clear, 20% cloud cover");
}

#[test]
fn missing_daily_block_fails_loudly() {
    let mut payload = sample_payload();
    payload.as_object_mut().unwrap().remove("daily");

    let snapshot = WeatherSnapshot::from_json(&payload.to_string()).unwrap();
    let err = WeatherReportFormatter::new(&snapshot).report("Here", 5).unwrap_err();

    match err {
        ReportError::MissingField(path) => assert_eq!(path, "daily"),
        other => panic!("unexpected error: {other:?}"),
    }
}
