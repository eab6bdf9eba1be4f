/// External API clients module
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::errors::{ApiError, ApiResult};

/// HTTP client wrapper with common configuration
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new(timeout: Duration) -> ApiResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent("agrosync-api/1.0")
            .build()?;
        Ok(Self { client })
    }

    pub fn get_client(&self) -> &Client {
        &self.client
    }
}

/// Current-weather payload from OpenWeatherMap, reduced to the fields the
/// service forwards.
#[derive(Debug, Deserialize)]
pub struct OpenWeatherResponse {
    pub main: MainReadings,
    pub weather: Vec<ConditionEntry>,
    pub wind: WindReading,
    pub clouds: CloudCover,
    pub sys: SunTimes,
    #[serde(default)]
    pub rain: Option<RainVolume>,
}

#[derive(Debug, Deserialize)]
pub struct MainReadings {
    pub temp: f64,
    pub feels_like: f64,
    pub humidity: i64,
    pub pressure: i64,
}

#[derive(Debug, Deserialize)]
pub struct ConditionEntry {
    pub main: String,
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Deserialize)]
pub struct WindReading {
    /// m/s with metric units requested.
    pub speed: f64,
}

#[derive(Debug, Deserialize)]
pub struct CloudCover {
    pub all: i64,
}

#[derive(Debug, Deserialize)]
pub struct SunTimes {
    pub sunrise: i64,
    pub sunset: i64,
}

#[derive(Debug, Deserialize)]
pub struct RainVolume {
    #[serde(rename = "1h", default)]
    pub one_hour: f64,
}

const OPENWEATHER_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

/// OpenWeatherMap client
pub struct WeatherClient {
    http_client: HttpClient,
}

impl WeatherClient {
    pub fn new() -> ApiResult<Self> {
        Ok(Self {
            http_client: HttpClient::new(Duration::from_secs(10))?,
        })
    }

    /// Fetch current weather for a location query string.
    pub async fn fetch_current(
        &self,
        location: &str,
        api_key: &str,
    ) -> ApiResult<OpenWeatherResponse> {
        let resp = self
            .http_client
            .get_client()
            .get(OPENWEATHER_URL)
            .query(&[("q", location), ("appid", api_key), ("units", "metric")])
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(ApiError::Upstream {
                status: resp.status().as_u16(),
            });
        }

        let payload = resp.json().await?;
        Ok(payload)
    }
}

/// Supabase REST reachability probe
pub struct SupabaseClient {
    http_client: HttpClient,
}

impl SupabaseClient {
    pub fn new() -> ApiResult<Self> {
        Ok(Self {
            http_client: HttpClient::new(Duration::from_secs(5))?,
        })
    }

    /// Probe the REST root and describe the outcome as a health string.
    /// 200 and 404 both count as reachable: 404 just means the API
    /// answered without a matching route.
    pub async fn probe(&self, base_url: &str, anon_key: &str) -> String {
        let url = format!("{}/rest/v1/", base_url.trim_end_matches('/'));
        let result = self
            .http_client
            .get_client()
            .get(&url)
            .header("apikey", anon_key)
            .bearer_auth(anon_key)
            .send()
            .await;

        match result {
            Ok(resp) => match resp.status().as_u16() {
                200 | 404 => "connected".to_string(),
                code => format!("error_{}", code),
            },
            Err(e) => format!("error: {}", e),
        }
    }
}
