use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Raw Open-Meteo payload. Everything here is optional: degraded responses
// drop whole sections, individual readings, or trailing array elements, and
// deserialization must not be where that surfaces.
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawForecast {
    pub current: Option<RawCurrent>,
    pub daily: Option<RawDaily>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCurrent {
    pub time: Option<String>,
    pub temperature_2m: Option<f64>,
    pub relative_humidity_2m: Option<f64>,
    pub apparent_temperature: Option<f64>,
    pub weather_code: Option<i32>,
    pub wind_speed_10m: Option<f64>,
}

/// Parallel daily arrays keyed by date. The arrays are not guaranteed equal
/// length in degraded responses; the normalizer reconciles them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawDaily {
    #[serde(default)]
    pub time: Vec<String>,
    #[serde(default)]
    pub temperature_2m_max: Vec<Option<f64>>,
    #[serde(default)]
    pub temperature_2m_min: Vec<Option<f64>>,
    #[serde(default)]
    pub precipitation_probability_max: Vec<Option<f64>>,
    #[serde(default)]
    pub weather_code: Vec<Option<i32>>,
}

// ---------------------------------------------------------------------------
// Normalized output shape. Missing readings stay `null` on the wire: a
// missing measurement is a distinct state from a measurement of zero.
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrentConditions {
    pub temperature: Option<f64>,
    pub apparent_temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub wind_speed: Option<f64>,
    pub weather_code: Option<i32>,
    pub weather: &'static str,
    pub time: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyForecastEntry {
    pub date: String,
    pub temperature_max: Option<f64>,
    pub temperature_min: Option<f64>,
    pub precipitation_probability: Option<f64>,
    pub weather_code: Option<i32>,
    pub weather: &'static str,
}

/// One normalized forecast, scoped to a single location and a single request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastResult {
    pub current: CurrentConditions,
    pub daily: Vec<DailyForecastEntry>,
}
