//! Weather API client
//!
//! Integrates with OpenWeatherMap for current conditions. The provider's
//! reply carries its own status field (`cod`) alongside the HTTP status; the
//! success sentinel is 200 and anything else counts as a rejection.

use reqwest::Client;
use serde::{Deserialize, Deserializer};
use thiserror::Error;

use shared::WeatherReading;

/// Failure modes of a weather lookup
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// Provider-side rejection: unknown city, bad status field, or a body we
    /// cannot make sense of
    #[error("Could not fetch weather. Check city name.")]
    ProviderRejected,

    /// Transport failure before a reply arrived
    #[error("Weather service is temporarily unavailable")]
    ProviderUnavailable,
}

/// Weather API client
#[derive(Clone)]
pub struct WeatherClient {
    client: Client,
    api_key: String,
    base_url: String,
    default_city: String,
}

/// OpenWeatherMap current-weather response
///
/// Every field except `cod` is optional: error replies carry only `cod` and a
/// message.
#[derive(Debug, Deserialize)]
struct OwmCurrentResponse {
    #[serde(deserialize_with = "deserialize_cod")]
    cod: i64,
    #[serde(default)]
    weather: Vec<OwmWeather>,
    main: Option<OwmMain>,
    wind: Option<OwmWind>,
}

#[derive(Debug, Deserialize)]
struct OwmWeather {
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwmMain {
    temp: f64,
    feels_like: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwmWind {
    speed: f64,
}

// OpenWeatherMap sends `cod` as a number on success and a numeric string on
// errors ("404").
fn deserialize_cod<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Cod {
        Number(i64),
        Text(String),
    }

    match Cod::deserialize(deserializer)? {
        Cod::Number(n) => Ok(n),
        Cod::Text(s) => s.parse().map_err(serde::de::Error::custom),
    }
}

const SUCCESS_SENTINEL: i64 = 200;

impl WeatherClient {
    /// Create a new WeatherClient against the production endpoint
    pub fn new(api_key: String, default_city: String) -> Self {
        Self::with_base_url(
            api_key,
            default_city,
            "https://api.openweathermap.org/data/2.5".to_string(),
        )
    }

    /// Create a new WeatherClient with custom base URL (for testing)
    pub fn with_base_url(api_key: String, default_city: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url,
            default_city,
        }
    }

    /// Fetch current conditions for a city.
    ///
    /// A blank city falls back to the configured default. No retries, no
    /// partial results.
    pub async fn fetch(&self, city: &str) -> Result<WeatherReading, LookupError> {
        let city = match city.trim() {
            "" => self.default_city.as_str(),
            trimmed => trimmed,
        };

        let response = self
            .client
            .get(format!("{}/weather", self.base_url))
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("Weather API request failed: {}", e);
                LookupError::ProviderUnavailable
            })?;

        let data: OwmCurrentResponse = response.json().await.map_err(|e| {
            tracing::warn!("Failed to parse weather response: {}", e);
            LookupError::ProviderRejected
        })?;

        if data.cod != SUCCESS_SENTINEL {
            tracing::debug!("Weather provider rejected lookup for {}: cod {}", city, data.cod);
            return Err(LookupError::ProviderRejected);
        }

        let condition = data
            .weather
            .first()
            .map(|w| w.description.clone())
            .ok_or(LookupError::ProviderRejected)?;
        let main = data.main.ok_or(LookupError::ProviderRejected)?;
        let wind = data.wind.ok_or(LookupError::ProviderRejected)?;

        Ok(WeatherReading {
            city: city.to_string(),
            temperature_c: main.temp,
            feels_like_c: main.feels_like,
            condition,
            humidity_pct: main.humidity,
            wind_speed_mps: wind.speed,
        })
    }
}
