/// Main application entry point with clean architecture
mod analysis;
mod clients;
mod config;
mod domain;
mod drone;
mod errors;
mod handlers;
mod routes;
mod services;
mod suggestions;
mod utils;

use crate::clients::{SupabaseClient, WeatherClient};
use crate::config::AppConfig;
use crate::handlers::AppState;
use crate::routes::build_router;
use crate::services::{
    AnalysisService, DroneService, HealthService, SuggestionService, WeatherService,
};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    // Load configuration
    let config = AppConfig::from_env()?;
    info!("Configuration loaded successfully");

    // Initialize clients
    let weather_client = WeatherClient::new()?;
    let supabase_client = SupabaseClient::new()?;

    // Initialize application state
    let state = AppState {
        analysis_service: Arc::new(AnalysisService::new()),
        suggestion_service: Arc::new(SuggestionService::new(&config)),
        weather_service: Arc::new(WeatherService::new(&config, weather_client)),
        drone_service: Arc::new(DroneService::new()),
        health_service: Arc::new(HealthService::new(config, supabase_client)),
    };

    // Build router
    let app = build_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind("0.0.0.0:8000").await?;
    info!("agrosync_api service listening on 0.0.0.0:8000");

    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
