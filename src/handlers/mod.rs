/// HTTP request handlers
use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

use crate::domain::{DroneTelemetry, Health, SuggestionAdvice, WeatherSnapshot};
use crate::errors::ApiError;
use crate::services::{
    AnalysisService, DroneService, HealthService, SuggestionService, WeatherService,
};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub analysis_service: Arc<AnalysisService>,
    pub suggestion_service: Arc<SuggestionService>,
    pub weather_service: Arc<WeatherService>,
    pub drone_service: Arc<DroneService>,
    pub health_service: Arc<HealthService>,
}

/// Successful response wrapper
#[derive(Serialize)]
pub struct SuccessResponse<T: Serialize> {
    pub success: bool,
    #[serde(flatten)]
    pub data: T,
}

impl<T: Serialize> SuccessResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Service metadata handler
pub async fn root() -> Json<Value> {
    Json(serde_json::json!({
        "message": "Welcome to AgroSync API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": [
            "/analyze-image",
            "/get-weather",
            "/get-drone-data",
            "/get-suggestions"
        ]
    }))
}

/// Health check handler
pub async fn health(State(state): State<AppState>) -> Json<Health> {
    Json(state.health_service.report().await)
}

/// Analyze an uploaded crop image
pub async fn analyze_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<Value>, ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::InvalidInput(e.to_string()))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field.file_name().map(|s| s.to_string());
        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::InvalidInput(e.to_string()))?;

        let analysis = state.analysis_service.analyze(&bytes)?;
        return Ok(Json(serde_json::json!({
            "success": true,
            "filename": filename,
            "analysis": analysis
        })));
    }

    Err(ApiError::InvalidInput(
        "multipart field 'file' is required".to_string(),
    ))
}

#[derive(Debug, Deserialize)]
pub struct SuggestionRequest {
    #[serde(default)]
    pub primary_issue: Option<String>,
}

/// Get advisory suggestions for a detected issue
pub async fn get_suggestions(
    State(state): State<AppState>,
    Json(request): Json<SuggestionRequest>,
) -> Json<SuggestionAdvice> {
    let issue = request.primary_issue.as_deref().unwrap_or("Unknown");
    Json(state.suggestion_service.advise(issue))
}

/// Get current weather for the configured location
pub async fn get_weather(
    State(state): State<AppState>,
) -> Result<Json<SuccessResponse<WeatherSnapshot>>, ApiError> {
    let snapshot = state.weather_service.current().await?;
    Ok(Json(SuccessResponse::new(snapshot)))
}

/// Get a simulated drone telemetry snapshot
pub async fn get_drone_data(State(state): State<AppState>) -> Json<SuccessResponse<DroneTelemetry>> {
    Json(SuccessResponse::new(state.drone_service.snapshot()))
}
