//! HTTP handlers for weather lookups

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use shared::WeatherReading;

use crate::error::{AppError, AppResult};
use crate::middleware::CurrentSession;
use crate::services::WeatherService;
use crate::AppState;

/// Query parameters for a lookup
#[derive(Debug, Deserialize)]
pub struct WeatherQuery {
    pub city: Option<String>,
}

/// Weather report shaped for display: every numeric field carries its unit
#[derive(Debug, Serialize)]
pub struct WeatherReport {
    pub city: String,
    pub temperature: String,
    pub feels_like: String,
    pub condition: String,
    pub humidity: String,
    pub wind_speed: String,
}

impl From<WeatherReading> for WeatherReport {
    fn from(reading: WeatherReading) -> Self {
        Self {
            city: reading.city,
            temperature: format!("{}°C", reading.temperature_c),
            feels_like: format!("{}°C", reading.feels_like_c),
            condition: reading.condition,
            humidity: format!("{}%", reading.humidity_pct),
            wind_speed: format!("{} m/s", reading.wind_speed_mps),
        }
    }
}

/// Credit-gated weather lookup
pub async fn get_weather(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    Query(query): Query<WeatherQuery>,
) -> AppResult<Json<WeatherReport>> {
    let client = state
        .weather
        .clone()
        .ok_or(AppError::NotConfigured("The weather provider"))?;

    let service = WeatherService::new(client, state.sessions.clone());
    let reading = service
        .lookup(
            session.token,
            query.city.as_deref().unwrap_or(""),
            Utc::now(),
        )
        .await?;

    Ok(Json(reading.into()))
}
