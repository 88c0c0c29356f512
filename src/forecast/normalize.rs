use super::types::{CurrentConditions, DailyForecastEntry, ForecastResult, RawCurrent, RawDaily, RawForecast};
use crate::weather_code;
use chrono::NaiveDateTime;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NormalizeError {
    #[error("provider response is missing the current or daily section")]
    IncompleteData,
}

/// Shape a raw provider payload into a [`ForecastResult`].
///
/// Both the `current` and `daily` sections must be present; a forecast
/// without either is not a usable product and fails as a whole. Within the
/// sections every reading is individually optional.
pub fn normalize(raw: RawForecast) -> Result<ForecastResult, NormalizeError> {
    let (current, daily) = match (raw.current, raw.daily) {
        (Some(current), Some(daily)) => (current, daily),
        _ => return Err(NormalizeError::IncompleteData),
    };

    Ok(ForecastResult {
        current: normalize_current(current),
        daily: normalize_daily(daily),
    })
}

fn normalize_current(current: RawCurrent) -> CurrentConditions {
    CurrentConditions {
        temperature: current.temperature_2m,
        apparent_temperature: current.apparent_temperature,
        humidity: current.relative_humidity_2m,
        wind_speed: current.wind_speed_10m,
        weather_code: current.weather_code,
        weather: weather_code::describe(current.weather_code),
        time: current.time.map(format_observation_time),
    }
}

fn normalize_daily(daily: RawDaily) -> Vec<DailyForecastEntry> {
    // The parallel arrays may be ragged in degraded responses. Only the
    // minimum common length is usable; indexing past the shortest array or
    // padding a truly missing day would fabricate data.
    let days = daily
        .time
        .len()
        .min(daily.temperature_2m_max.len())
        .min(daily.temperature_2m_min.len())
        .min(daily.precipitation_probability_max.len())
        .min(daily.weather_code.len());

    (0..days)
        .map(|idx| {
            let code = daily.weather_code[idx];
            DailyForecastEntry {
                date: daily.time[idx].clone(),
                temperature_max: daily.temperature_2m_max[idx],
                temperature_min: daily.temperature_2m_min[idx],
                precipitation_probability: daily.precipitation_probability_max[idx],
                weather_code: code,
                weather: weather_code::describe(code),
            }
        })
        .collect()
}

/// Reformat an ISO-8601-like observation timestamp to `YYYY-MM-DD HH:MM`.
/// Formatting is display-only: input that does not parse passes through
/// unchanged instead of failing the request.
fn format_observation_time(value: String) -> String {
    NaiveDateTime::parse_from_str(&value, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(&value, "%Y-%m-%dT%H:%M:%S"))
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or(value)
}
