use crate::catalog::{self, Location};
use crate::forecast::normalize::{normalize, NormalizeError};
use crate::forecast::types::ForecastResult;
use crate::forecast::ForecastProvider;
use std::sync::Arc;
use thiserror::Error;

/// Failure taxonomy for a forecast lookup. Every variant is recoverable by
/// the caller retrying; the display texts are the user-facing messages and
/// are a fixed contract with existing consumers.
#[derive(Error, Debug)]
pub enum WeatherError {
    #[error("请选择有效的城市或县区。")]
    UnknownLocation,
    #[error("天气服务暂时不可用，请稍后重试。")]
    ProviderUnavailable,
    #[error("天气数据不完整，请稍后再试。")]
    IncompleteData,
}

impl From<NormalizeError> for WeatherError {
    fn from(_: NormalizeError) -> Self {
        WeatherError::IncompleteData
    }
}

/// Resolves a location identifier and orchestrates fetch + normalize.
#[derive(Clone)]
pub struct WeatherService {
    provider: Arc<dyn ForecastProvider>,
}

impl WeatherService {
    pub fn new(provider: Arc<dyn ForecastProvider>) -> Self {
        Self { provider }
    }

    /// One forecast lookup: resolve the identifier, make exactly one
    /// provider request, normalize. A catalog miss never reaches the
    /// provider.
    pub async fn get_forecast(
        &self,
        identifier: &str,
    ) -> Result<(&'static Location, ForecastResult), WeatherError> {
        let location = catalog::find_by_id(identifier).ok_or(WeatherError::UnknownLocation)?;

        let raw = self.provider.fetch(location).await.map_err(|err| {
            tracing::warn!(location = location.id, error = %err, "forecast fetch failed");
            WeatherError::ProviderUnavailable
        })?;

        let forecast = normalize(raw)?;
        Ok((location, forecast))
    }
}
