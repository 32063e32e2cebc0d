use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument};

use crate::model::ForecastRequest;

use super::{ForecastSource, truncate_body};

/// Client for the Open-Meteo `/forecast` endpoint.
#[derive(Debug, Clone)]
pub struct OpenMeteoSource {
    http: Client,
    base_url: String,
}

impl OpenMeteoSource {
    pub fn new(http: Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl ForecastSource for OpenMeteoSource {
    #[instrument(skip(self), fields(lat = request.latitude, lon = request.longitude))]
    async fn fetch_forecast(&self, request: &ForecastRequest) -> Result<String> {
        let url = format!("{}/forecast", self.base_url);

        let res = self
            .http
            .get(&url)
            .query(&request.query_pairs())
            .send()
            .await
            .context("Failed to send request to Open-Meteo")?;

        let status = res.status();
        let body = res
            .text()
            .await
            .context("Failed to read Open-Meteo response body")?;

        if !status.is_success() {
            return Err(anyhow!(
                "Failed to retrieve weather data. Status code: {}: {}",
                status,
                truncate_body(&body),
            ));
        }

        debug!(bytes = body.len(), "received forecast payload");
        Ok(body)
    }
}
