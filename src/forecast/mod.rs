pub mod normalize;
pub mod open_meteo;
pub mod types;

use crate::catalog::Location;
use async_trait::async_trait;
use open_meteo::ProviderError;
use types::RawForecast;

/// Upstream forecast source. The production implementation is
/// [`open_meteo::OpenMeteoClient`]; tests substitute stubs.
#[async_trait]
pub trait ForecastProvider: Send + Sync {
    async fn fetch(&self, location: &Location) -> Result<RawForecast, ProviderError>;
}
