/// Business logic services layer
use chrono::Utc;
use tracing::debug;

use crate::analysis;
use crate::clients::{OpenWeatherResponse, SupabaseClient, WeatherClient};
use crate::config::AppConfig;
use crate::domain::{
    AnalysisResult, DroneTelemetry, Health, ServiceHealth, SuggestionAdvice, WeatherSnapshot,
};
use crate::drone;
use crate::errors::{ApiError, ApiResult};
use crate::suggestions::suggestions_for;
use crate::utils::round1;

const API_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crop image analysis service
pub struct AnalysisService;

impl AnalysisService {
    pub fn new() -> Self {
        Self
    }

    /// Decode, normalize and classify an uploaded image.
    pub fn analyze(&self, bytes: &[u8]) -> ApiResult<AnalysisResult> {
        let sample = analysis::extract_sample(bytes)?;
        debug!(
            width = sample.width,
            height = sample.height,
            "image normalized for analysis"
        );
        Ok(analysis::classify(&sample))
    }
}

/// Advisory suggestion service
///
/// Permanently serves the static fallback table. The Gemini key only
/// changes the accompanying message, never the suggestion source.
pub struct SuggestionService {
    gemini_api_key: String,
}

impl SuggestionService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            gemini_api_key: config.gemini_api_key.clone(),
        }
    }

    pub fn advise(&self, issue: &str) -> SuggestionAdvice {
        let message = if self.gemini_api_key.is_empty() {
            "Gemini API key not configured"
        } else {
            "Gemini API integration available - add key to enable"
        };

        SuggestionAdvice {
            success: false,
            message: message.to_string(),
            suggestions: suggestions_for(issue).to_vec(),
        }
    }
}

/// Weather proxy service
pub struct WeatherService {
    client: WeatherClient,
    api_key: String,
    location: String,
    location_label: String,
}

impl WeatherService {
    pub fn new(config: &AppConfig, client: WeatherClient) -> Self {
        Self {
            client,
            api_key: config.weather_api_key.clone(),
            location: config.weather_location.clone(),
            location_label: config.weather_location_label.clone(),
        }
    }

    /// Fetch and reshape current weather for the configured location.
    /// Fails before any network I/O when no API key is configured.
    pub async fn current(&self) -> ApiResult<WeatherSnapshot> {
        if self.api_key.is_empty() {
            return Err(ApiError::MissingConfig("Weather API key"));
        }

        let payload = self
            .client
            .fetch_current(&self.location, &self.api_key)
            .await?;
        reshape(self.location_label.clone(), payload)
    }
}

/// Reshape the provider payload: wind m/s to km/h, one-decimal rounding,
/// absent rain volume reported as 0.
fn reshape(location: String, payload: OpenWeatherResponse) -> ApiResult<WeatherSnapshot> {
    let condition = payload
        .weather
        .first()
        .ok_or_else(|| ApiError::Internal("upstream payload has no weather conditions".to_string()))?;

    Ok(WeatherSnapshot {
        location,
        temperature: round1(payload.main.temp),
        feels_like: round1(payload.main.feels_like),
        humidity: payload.main.humidity,
        pressure: payload.main.pressure,
        wind_speed: round1(payload.wind.speed * 3.6),
        weather_condition: condition.main.clone(),
        weather_description: condition.description.clone(),
        clouds: payload.clouds.all,
        sunrise: payload.sys.sunrise,
        sunset: payload.sys.sunset,
        rain_forecast: payload.rain.as_ref().map(|r| r.one_hour).unwrap_or(0.0),
        icon: condition.icon.clone(),
    })
}

/// Drone telemetry service
pub struct DroneService;

impl DroneService {
    pub fn new() -> Self {
        Self
    }

    pub fn snapshot(&self) -> DroneTelemetry {
        drone::simulate(&mut rand::rng())
    }
}

/// Composite health report service
pub struct HealthService {
    config: AppConfig,
    supabase: SupabaseClient,
}

impl HealthService {
    pub fn new(config: AppConfig, supabase: SupabaseClient) -> Self {
        Self { config, supabase }
    }

    /// Report configuration presence per dependency, plus a live Supabase
    /// reachability probe when credentials are present.
    pub async fn report(&self) -> Health {
        let supabase =
            if !self.config.supabase_url.is_empty() && !self.config.supabase_anon_key.is_empty() {
                self.supabase
                    .probe(&self.config.supabase_url, &self.config.supabase_anon_key)
                    .await
            } else {
                "not_configured".to_string()
            };

        Health {
            status: "healthy",
            api_version: API_VERSION,
            now: Utc::now(),
            services: ServiceHealth {
                weather_api: configured_flag(!self.config.weather_api_key.is_empty()),
                gemini_api: configured_flag(!self.config.gemini_api_key.is_empty()),
                supabase,
            },
        }
    }
}

fn configured_flag(present: bool) -> &'static str {
    if present {
        "configured"
    } else {
        "not_configured"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> AppConfig {
        AppConfig {
            weather_api_key: String::new(),
            gemini_api_key: String::new(),
            weather_location: "Thiruvallur,IN".to_string(),
            weather_location_label: "Thiruvallur, India".to_string(),
            supabase_url: String::new(),
            supabase_anon_key: String::new(),
        }
    }

    fn fixture() -> OpenWeatherResponse {
        serde_json::from_value(serde_json::json!({
            "main": {
                "temp": 31.46,
                "feels_like": 35.02,
                "humidity": 74,
                "pressure": 1008
            },
            "weather": [{
                "main": "Clouds",
                "description": "scattered clouds",
                "icon": "03d"
            }],
            "wind": { "speed": 4.12 },
            "clouds": { "all": 40 },
            "sys": { "sunrise": 1_717_200_000, "sunset": 1_717_246_800 }
        }))
        .unwrap()
    }

    #[test]
    fn test_reshape_converts_wind_to_kmh() {
        let snapshot = reshape("Thiruvallur, India".to_string(), fixture()).unwrap();
        // 4.12 m/s * 3.6 = 14.832 -> 14.8 km/h
        assert_eq!(snapshot.wind_speed, 14.8);
    }

    #[test]
    fn test_reshape_rounds_temperatures() {
        let snapshot = reshape("x".to_string(), fixture()).unwrap();
        assert_eq!(snapshot.temperature, 31.5);
        assert_eq!(snapshot.feels_like, 35.0);
    }

    #[test]
    fn test_reshape_defaults_missing_rain_to_zero() {
        let snapshot = reshape("x".to_string(), fixture()).unwrap();
        assert_eq!(snapshot.rain_forecast, 0.0);
    }

    #[test]
    fn test_reshape_reads_rain_volume_when_present() {
        let mut payload = fixture();
        payload.rain = serde_json::from_value(serde_json::json!({ "1h": 0.73 })).unwrap();
        let snapshot = reshape("x".to_string(), payload).unwrap();
        assert_eq!(snapshot.rain_forecast, 0.73);
    }

    #[test]
    fn test_reshape_copies_condition_fields() {
        let snapshot = reshape("x".to_string(), fixture()).unwrap();
        assert_eq!(snapshot.weather_condition, "Clouds");
        assert_eq!(snapshot.weather_description, "scattered clouds");
        assert_eq!(snapshot.icon, "03d");
    }

    #[test]
    fn test_reshape_rejects_empty_condition_list() {
        let mut payload = fixture();
        payload.weather.clear();
        assert!(reshape("x".to_string(), payload).is_err());
    }

    #[tokio::test]
    async fn test_weather_fails_fast_without_api_key() {
        let service = WeatherService::new(&test_config(), WeatherClient::new().unwrap());
        let err = service.current().await.unwrap_err();
        assert!(matches!(err, ApiError::MissingConfig(_)));
    }

    #[test]
    fn test_suggestions_report_missing_gemini_key() {
        let service = SuggestionService::new(&test_config());
        let advice = service.advise("Healthy Crop");
        assert!(!advice.success);
        assert_eq!(advice.message, "Gemini API key not configured");
        assert_eq!(advice.suggestions.len(), 5);
    }

    #[test]
    fn test_suggestions_fall_back_for_unknown_issue() {
        let service = SuggestionService::new(&test_config());
        let advice = service.advise("Unknown");
        assert_eq!(advice.suggestions.len(), 3);
    }

    #[tokio::test]
    async fn test_health_reports_unconfigured_dependencies() {
        let service = HealthService::new(test_config(), SupabaseClient::new().unwrap());
        let health = service.report().await;

        assert_eq!(health.status, "healthy");
        assert_eq!(health.services.weather_api, "not_configured");
        assert_eq!(health.services.gemini_api, "not_configured");
        assert_eq!(health.services.supabase, "not_configured");
    }
}
