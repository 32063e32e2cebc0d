//! Core library for the `current-weather` CLI.
//!
//! This crate defines:
//! - Interpretation of Open-Meteo forecast payloads into report lines
//! - WMO weather code, compass direction and number formatting helpers
//! - Configuration handling
//! - Abstractions over the forecast source and reverse geocoder
//!
//! Formatting is pure and synchronous; only the `provider` module performs I/O.

pub mod codes;
pub mod config;
pub mod direction;
pub mod error;
pub mod model;
pub mod number;
pub mod provider;
pub mod report;
pub mod snapshot;

pub use config::Config;
pub use direction::{Direction, cardinal};
pub use error::ReportError;
pub use model::ForecastRequest;
pub use number::rounded_units;
pub use provider::{ForecastSource, LocationResolver, UNKNOWN_LOCATION};
pub use report::{Report, WeatherReportFormatter};
pub use snapshot::WeatherSnapshot;
