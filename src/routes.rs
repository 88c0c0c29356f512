use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};

use crate::catalog::{self, Location};
use crate::forecast::types::ForecastResult;
use crate::service::{WeatherError, WeatherService};

// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub service: WeatherService,
}

// Request/Response types
#[derive(Debug, Deserialize)]
pub struct WeatherQuery {
    pub city: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct FnWeatherQuery {
    pub location_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub version: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Primary envelope: full location metadata plus the normalized forecast.
#[derive(Debug, Serialize)]
pub struct CityWeatherResponse {
    pub city: &'static Location,
    pub forecast: ForecastResult,
}

// Serverless-flavored envelope. Same lookup core, different presentation:
// flattened location, renamed reading keys, values rounded to one decimal.
#[derive(Debug, Serialize)]
pub struct FnWeatherResponse {
    pub location: FnLocation,
    pub current: FnCurrent,
    pub forecast: Vec<FnDailyEntry>,
}

#[derive(Debug, Serialize)]
pub struct FnLocation {
    pub province: &'static str,
    pub city: &'static str,
}

#[derive(Debug, Serialize)]
pub struct FnCurrent {
    pub temperature: Option<f64>,
    pub feels_like: Option<f64>,
    pub humidity: Option<f64>,
    pub wind_speed: Option<f64>,
    pub weather: &'static str,
    pub weather_code: Option<i32>,
}

#[derive(Debug, Serialize)]
pub struct FnDailyEntry {
    pub date: String,
    pub weather: &'static str,
    pub max_temp: Option<f64>,
    pub min_temp: Option<f64>,
}

impl FnWeatherResponse {
    fn from_forecast(location: &'static Location, forecast: ForecastResult) -> Self {
        Self {
            location: FnLocation {
                province: location.province,
                city: location.city,
            },
            current: FnCurrent {
                temperature: forecast.current.temperature.map(round1),
                feels_like: forecast.current.apparent_temperature.map(round1),
                humidity: forecast.current.humidity.map(round1),
                wind_speed: forecast.current.wind_speed.map(round1),
                weather: forecast.current.weather,
                weather_code: forecast.current.weather_code,
            },
            forecast: forecast
                .daily
                .into_iter()
                .map(|day| FnDailyEntry {
                    date: day.date,
                    weather: day.weather,
                    max_temp: day.temperature_max.map(round1),
                    min_temp: day.temperature_min.map(round1),
                })
                .collect(),
        }
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn error_response(err: &WeatherError) -> (StatusCode, Json<ErrorBody>) {
    let status = match err {
        WeatherError::UnknownLocation => StatusCode::BAD_REQUEST,
        WeatherError::ProviderUnavailable | WeatherError::IncompleteData => StatusCode::BAD_GATEWAY,
    };
    (
        status,
        Json(ErrorBody {
            error: err.to_string(),
        }),
    )
}

// Route handlers
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

pub async fn list_locations() -> Json<Vec<&'static Location>> {
    Json(catalog::all_locations())
}

pub async fn get_weather(
    State(state): State<AppState>,
    Query(params): Query<WeatherQuery>,
) -> Result<Json<CityWeatherResponse>, (StatusCode, Json<ErrorBody>)> {
    let city_id = params.city.as_deref().unwrap_or("");

    match state.service.get_forecast(city_id).await {
        Ok((city, forecast)) => Ok(Json(CityWeatherResponse { city, forecast })),
        Err(err) => {
            tracing::error!(city = city_id, error = %err, "weather lookup failed");
            Err(error_response(&err))
        }
    }
}

pub async fn fn_weather(
    State(state): State<AppState>,
    Query(params): Query<FnWeatherQuery>,
) -> Result<Json<FnWeatherResponse>, (StatusCode, Json<ErrorBody>)> {
    let location_id = params.location_id.as_deref().unwrap_or("nanchang");

    match state.service.get_forecast(location_id).await {
        Ok((location, forecast)) => Ok(Json(FnWeatherResponse::from_forecast(location, forecast))),
        Err(err) => {
            tracing::error!(location = location_id, error = %err, "weather lookup failed");
            Err(error_response(&err))
        }
    }
}

// Create the router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/locations", get(list_locations))
        .route("/api/weather", get(get_weather))
        .route("/api/fn/weather", get(fn_weather))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forecast::types::{CurrentConditions, DailyForecastEntry};

    fn sample_forecast() -> ForecastResult {
        ForecastResult {
            current: CurrentConditions {
                temperature: Some(21.46),
                apparent_temperature: None,
                humidity: Some(68.0),
                wind_speed: Some(7.64),
                weather_code: Some(2),
                weather: "多云",
                time: Some("2024-05-01 08:15".to_string()),
            },
            daily: vec![DailyForecastEntry {
                date: "2024-05-01".to_string(),
                temperature_max: Some(25.04),
                temperature_min: None,
                precipitation_probability: Some(10.0),
                weather_code: Some(2),
                weather: "多云",
            }],
        }
    }

    #[test]
    fn city_envelope_shape() {
        let city = catalog::find_by_id("nanchang").unwrap();
        let response = CityWeatherResponse {
            city,
            forecast: sample_forecast(),
        };
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["city"]["province"], "江西省");
        assert_eq!(value["city"]["id"], "nanchang");
        assert_eq!(value["forecast"]["current"]["weather"], "多云");
        assert_eq!(value["forecast"]["daily"][0]["date"], "2024-05-01");
        // A missing reading serializes as an explicit null, never omitted.
        assert!(value["forecast"]["current"]
            .get("apparent_temperature")
            .unwrap()
            .is_null());
    }

    #[test]
    fn fn_envelope_shape() {
        let location = catalog::find_by_id("nanchang").unwrap();
        let response = FnWeatherResponse::from_forecast(location, sample_forecast());
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["location"]["city"], "南昌市");
        assert!(value["location"].get("id").is_none());
        assert_eq!(value["current"]["temperature"], 21.5);
        assert_eq!(value["current"]["wind_speed"], 7.6);
        assert!(value["current"]["feels_like"].is_null());
        assert_eq!(value["forecast"][0]["max_temp"], 25.0);
        assert!(value["forecast"][0]["min_temp"].is_null());
        assert_eq!(value["forecast"][0]["weather"], "多云");
    }

    #[test]
    fn error_statuses_follow_the_taxonomy() {
        let (status, body) = error_response(&WeatherError::UnknownLocation);
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "请选择有效的城市或县区。");

        let (status, _) = error_response(&WeatherError::ProviderUnavailable);
        assert_eq!(status, StatusCode::BAD_GATEWAY);

        let (status, _) = error_response(&WeatherError::IncompleteData);
        assert_eq!(status, StatusCode::BAD_GATEWAY);
    }
}
