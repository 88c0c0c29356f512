use serde::{Deserialize, Serialize};
use std::env;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    pub open_meteo_base_url: String,
    pub open_meteo_forecast_path: String,
    pub forecast_timezone: String,
    pub forecast_days: u8,
    pub request_timeout_secs: u64,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Config {
            open_meteo_base_url: env::var("OPEN_METEO_BASE_URL")
                .unwrap_or_else(|_| "https://api.open-meteo.com".to_string()),
            open_meteo_forecast_path: env::var("OPEN_METEO_FORECAST_PATH")
                .unwrap_or_else(|_| "/v1/forecast".to_string()),
            forecast_timezone: env::var("FORECAST_TIMEZONE")
                .unwrap_or_else(|_| "Asia/Shanghai".to_string()),
            forecast_days: env::var("FORECAST_DAYS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),
            request_timeout_secs: env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid port number"))?,
        })
    }
}
