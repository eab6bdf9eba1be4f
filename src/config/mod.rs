/// Application configuration module
use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub weather_api_key: String,
    pub gemini_api_key: String,
    pub weather_location: String,
    pub weather_location_label: String,
    pub supabase_url: String,
    pub supabase_anon_key: String,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Missing keys stay empty and are surfaced per-request (a handler
    /// reports "not_configured" or fails with a 400), so startup never
    /// depends on any external credential being present.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let weather_api_key = env::var("WEATHER_API_KEY").unwrap_or_default();
        let gemini_api_key = env::var("GEMINI_API_KEY").unwrap_or_default();

        let weather_location =
            env::var("WEATHER_LOCATION").unwrap_or_else(|_| "Thiruvallur,IN".to_string());
        let weather_location_label = env::var("WEATHER_LOCATION_LABEL")
            .unwrap_or_else(|_| "Thiruvallur, India".to_string());

        let supabase_url = env::var("SUPABASE_URL").unwrap_or_default();
        let supabase_anon_key = env::var("SUPABASE_ANON_KEY").unwrap_or_default();

        Ok(Self {
            weather_api_key,
            gemini_api_key,
            weather_location,
            weather_location_label,
            supabase_url,
            supabase_anon_key,
        })
    }
}
