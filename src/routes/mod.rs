/// Application routes configuration
use crate::handlers::{
    analyze_image, get_drone_data, get_suggestions, get_weather, health, root, AppState,
};
use axum::{
    routing::{get, post},
    Router,
};

/// Build the application router with all routes
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Service metadata and health
        .route("/", get(root))
        .route("/health", get(health))
        // Crop analysis endpoints
        .route("/analyze-image", post(analyze_image))
        .route("/get-suggestions", post(get_suggestions))
        // Dashboard data endpoints
        .route("/get-weather", get(get_weather))
        .route("/get-drone-data", get(get_drone_data))
        .with_state(state)
}
