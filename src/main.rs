use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod catalog;
mod config;
mod forecast;
mod routes;
mod service;
mod weather_code;

use config::Config;
use forecast::open_meteo::OpenMeteoClient;
use routes::{create_router, AppState};
use service::WeatherService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "jiangxi_weather_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;
    let port = config.port;

    // Initialize the forecast provider and the lookup service
    let provider = Arc::new(OpenMeteoClient::new(config));
    let service = WeatherService::new(provider);

    let state = AppState { service };

    let app: Router = create_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!("Server starting on http://0.0.0.0:{port}");

    axum::serve(listener, app).await?;

    Ok(())
}
