use anyhow::Context;
use clap::Parser;
use meteo_core::{
    Config, ForecastRequest, WeatherReportFormatter, WeatherSnapshot,
    provider::{forecast_source_from_config, location_resolver_from_config},
};
use tracing::{debug, info};

/// Current conditions and a short forecast from Open-Meteo.
#[derive(Debug, Parser)]
#[command(name = "current-weather", version, about = "Current weather and short forecast")]
pub struct Cli {
    /// Your latitude, e.g. 39.6142
    #[arg(long, allow_hyphen_values = true)]
    pub latitude: f64,

    /// Your longitude, e.g. -84.5560
    #[arg(long, allow_hyphen_values = true)]
    pub longitude: f64,

    /// Your time zone, in tz identifier format, e.g. "America/New_York"
    #[arg(long)]
    pub timezone: String,

    /// Number of forecast days to show (defaults to the config value).
    #[arg(long)]
    pub days: Option<usize>,

    /// Print the raw forecast payload and enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let mut config = Config::load()?;
        if self.debug {
            config.debug = true;
        }
        if let Some(days) = self.days {
            config.forecast_days = days;
        }
        debug!(?config, "effective configuration");

        let request = ForecastRequest::new(self.latitude, self.longitude, self.timezone);

        let resolver = location_resolver_from_config(&config)?;
        let source = forecast_source_from_config(&config)?;

        let (location, body) = tokio::join!(
            resolver.resolve(request.latitude, request.longitude),
            source.fetch_forecast(&request),
        );
        let body = body?;
        info!(%location, "forecast retrieved");

        if config.debug {
            let value: serde_json::Value =
                serde_json::from_str(&body).context("Forecast payload is not valid JSON")?;
            println!("{}", serde_json::to_string_pretty(&value)?);
        }

        let snapshot = WeatherSnapshot::from_json(&body)?;
        let report = WeatherReportFormatter::new(&snapshot)
            .report(&location, config.forecast_days)
            .context("Failed to format weather report")?;

        println!("{report}");

        Ok(())
    }
}
