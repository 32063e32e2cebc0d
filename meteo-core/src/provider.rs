use crate::{
    Config, ForecastRequest,
    provider::{nominatim::NominatimResolver, open_meteo::OpenMeteoSource},
};
use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use std::{fmt::Debug, time::Duration};

pub mod nominatim;
pub mod open_meteo;

/// Label used when a point cannot be named.
pub const UNKNOWN_LOCATION: &str = "Unknown location";

/// Supplies raw forecast payloads.
#[async_trait]
pub trait ForecastSource: Send + Sync + Debug {
    /// Fetch the response body for `request` as JSON text.
    async fn fetch_forecast(&self, request: &ForecastRequest) -> anyhow::Result<String>;
}

/// Turns coordinates into a display label.
#[async_trait]
pub trait LocationResolver: Send + Sync + Debug {
    /// Never fails; falls back to [`UNKNOWN_LOCATION`].
    async fn resolve(&self, latitude: f64, longitude: f64) -> String;
}

fn http_client(config: &Config) -> anyhow::Result<Client> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()
        .context("Failed to build HTTP client")
}

/// Construct the Open-Meteo forecast source from config.
pub fn forecast_source_from_config(config: &Config) -> anyhow::Result<Box<dyn ForecastSource>> {
    let http = http_client(config)?;
    Ok(Box::new(OpenMeteoSource::new(http, &config.api_base_url)))
}

/// Construct the reverse geocoder from config.
pub fn location_resolver_from_config(
    config: &Config,
) -> anyhow::Result<Box<dyn LocationResolver>> {
    let http = http_client(config)?;
    Ok(Box::new(NominatimResolver::new(http, &config.geocoder_base_url)))
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
