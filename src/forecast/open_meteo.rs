use super::types::RawForecast;
use super::ForecastProvider;
use crate::catalog::Location;
use crate::config::Config;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    #[error("provider returned HTTP {0}")]
    BadStatus(reqwest::StatusCode),
}

/// Thin client for the Open-Meteo forecast endpoint. One request per call,
/// no retries; the timeout is the only bound on the outbound call.
pub struct OpenMeteoClient {
    client: Client,
    config: Config,
}

impl OpenMeteoClient {
    pub fn new(config: Config) -> Self {
        let client = Client::builder()
            .user_agent("JiangxiWeatherServer/1.0")
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self { client, config }
    }
}

#[async_trait]
impl ForecastProvider for OpenMeteoClient {
    async fn fetch(&self, location: &Location) -> Result<RawForecast, ProviderError> {
        let url = format!(
            "{}{}",
            self.config.open_meteo_base_url, self.config.open_meteo_forecast_path
        );

        let response = self
            .client
            .get(&url)
            .query(&[
                ("latitude", location.latitude.to_string()),
                ("longitude", location.longitude.to_string()),
                (
                    "current",
                    "temperature_2m,relative_humidity_2m,apparent_temperature,\
                     weather_code,wind_speed_10m"
                        .to_string(),
                ),
                (
                    "daily",
                    "temperature_2m_max,temperature_2m_min,\
                     precipitation_probability_max,weather_code"
                        .to_string(),
                ),
                ("timezone", self.config.forecast_timezone.clone()),
                ("forecast_days", self.config.forecast_days.to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::BadStatus(status));
        }

        let raw: RawForecast = response.json().await?;
        Ok(raw)
    }
}
