/// Domain models for the application
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The fixed set of crop issues the heuristic classifier can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CropIssue {
    #[serde(rename = "Healthy Crop")]
    HealthyCrop,
    #[serde(rename = "Pest Damage Detected")]
    PestDamage,
    #[serde(rename = "Nutrient Deficiency")]
    NutrientDeficiency,
    #[serde(rename = "Water Stress/Dryness")]
    WaterStress,
    #[serde(rename = "Disease Detected")]
    Disease,
    #[serde(rename = "Soil Erosion")]
    SoilErosion,
}

impl CropIssue {
    pub const ALL: [CropIssue; 6] = [
        CropIssue::HealthyCrop,
        CropIssue::PestDamage,
        CropIssue::NutrientDeficiency,
        CropIssue::WaterStress,
        CropIssue::Disease,
        CropIssue::SoilErosion,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CropIssue::HealthyCrop => "Healthy Crop",
            CropIssue::PestDamage => "Pest Damage Detected",
            CropIssue::NutrientDeficiency => "Nutrient Deficiency",
            CropIssue::WaterStress => "Water Stress/Dryness",
            CropIssue::Disease => "Disease Detected",
            CropIssue::SoilErosion => "Soil Erosion",
        }
    }
}

/// Coarse severity attached to a classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    None,
    Medium,
    High,
}

/// A decoded, normalized image: fixed-size RGB pixel grid.
#[derive(Debug, Clone)]
pub struct ImageSample {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<[u8; 3]>,
}

impl ImageSample {
    /// Per-channel averages over all pixels. `None` for an empty grid.
    pub fn channel_averages(&self) -> Option<(f64, f64, f64)> {
        if self.pixels.is_empty() {
            return None;
        }
        let n = self.pixels.len() as f64;
        let (mut r, mut g, mut b) = (0.0f64, 0.0f64, 0.0f64);
        for p in &self.pixels {
            r += p[0] as f64;
            g += p[1] as f64;
            b += p[2] as f64;
        }
        Some((r / n, g / n, b / n))
    }
}

/// Numeric metrics reported alongside a classification.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisMetrics {
    pub brightness: f64,
    pub image_size: String,
    pub total_pixels: u64,
}

/// Result of the heuristic crop-image classifier.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    pub primary_issue: CropIssue,
    pub confidence: f64,
    pub severity: Severity,
    pub metrics: AnalysisMetrics,
    pub secondary_observations: Vec<String>,
}

/// Reshaped weather data from the upstream provider.
#[derive(Debug, Clone, Serialize)]
pub struct WeatherSnapshot {
    pub location: String,
    pub temperature: f64,
    pub feels_like: f64,
    pub humidity: i64,
    pub pressure: i64,
    /// km/h, converted from the provider's m/s.
    pub wind_speed: f64,
    pub weather_condition: String,
    pub weather_description: String,
    pub clouds: i64,
    pub sunrise: i64,
    pub sunset: i64,
    /// mm of rain over the last hour; 0 when the provider omits it.
    pub rain_forecast: f64,
    pub icon: String,
}

/// Advisory payload for a detected issue. `success` is false because the
/// suggestions always come from the static fallback table, never from a
/// generative provider.
#[derive(Debug, Serialize)]
pub struct SuggestionAdvice {
    pub success: bool,
    pub message: String,
    pub suggestions: Vec<&'static str>,
}

/// One point of the simulated battery time series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatterySample {
    pub time: String,
    pub battery: i32,
}

/// One simulated reading of drone sensor state.
#[derive(Debug, Clone, Serialize)]
pub struct DroneTelemetry {
    pub battery_percentage: i32,
    pub predicted_flight_time: i32,
    pub altitude: i32,
    pub speed: f64,
    pub temperature: f64,
    pub gps_satellites: i32,
    pub signal_strength: i32,
    pub battery_history: Vec<BatterySample>,
    pub low_battery_alert: bool,
    pub status: &'static str,
}

/// Per-dependency state strings for the health report.
#[derive(Debug, Serialize)]
pub struct ServiceHealth {
    pub weather_api: &'static str,
    pub gemini_api: &'static str,
    pub supabase: String,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub api_version: &'static str,
    pub now: DateTime<Utc>,
    pub services: ServiceHealth,
}
