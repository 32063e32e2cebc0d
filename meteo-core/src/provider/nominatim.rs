use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use super::{LocationResolver, UNKNOWN_LOCATION, truncate_body};

/// Reverse geocoder backed by OpenStreetMap Nominatim.
#[derive(Debug, Clone)]
pub struct NominatimResolver {
    http: Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct NmAddress {
    county: Option<String>,
    postcode: Option<String>,
}

#[derive(Debug, Deserialize)]
struct NmReverseResponse {
    address: Option<NmAddress>,
}

impl NominatimResolver {
    pub fn new(http: Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// `"<county>, <postcode>"` for the point, or `None` when Nominatim has no such address.
    pub async fn lookup(&self, latitude: f64, longitude: f64) -> Result<Option<String>> {
        let url = format!("{}/reverse", self.base_url);

        let res = self
            .http
            .get(&url)
            .query(&[
                ("lat", latitude.to_string()),
                ("lon", longitude.to_string()),
                ("format", "jsonv2".to_string()),
            ])
            .send()
            .await
            .context("Failed to send request to Nominatim")?;

        let status = res.status();
        let body = res
            .text()
            .await
            .context("Failed to read Nominatim response body")?;

        if !status.is_success() {
            return Err(anyhow!(
                "Nominatim reverse lookup failed with status {}: {}",
                status,
                truncate_body(&body),
            ));
        }

        let parsed: NmReverseResponse =
            serde_json::from_str(&body).context("Failed to parse Nominatim JSON")?;

        Ok(parsed.address.and_then(|addr| match (addr.county, addr.postcode) {
            (Some(county), Some(postcode)) => Some(format!("{county}, {postcode}")),
            _ => None,
        }))
    }
}

#[async_trait]
impl LocationResolver for NominatimResolver {
    async fn resolve(&self, latitude: f64, longitude: f64) -> String {
        match self.lookup(latitude, longitude).await {
            Ok(Some(label)) => label,
            Ok(None) => {
                debug!(latitude, longitude, "no county/postcode for point");
                UNKNOWN_LOCATION.to_string()
            }
            Err(err) => {
                debug!(error = %err, "reverse geocoding failed");
                UNKNOWN_LOCATION.to_string()
            }
        }
    }
}
