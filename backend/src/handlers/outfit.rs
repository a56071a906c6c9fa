//! Outfit suggestion handlers
//!
//! Both endpoints work off the session's cached reading; a lookup must have
//! happened first.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use shared::{simple_suggestion, OutfitAdvice, WeatherReading};

use crate::error::{AppError, AppResult};
use crate::middleware::CurrentSession;
use crate::services::OutfitService;
use crate::AppState;

#[derive(Serialize)]
pub struct OutfitResponse {
    pub city: String,
    pub suggestion: String,
}

#[derive(Debug, Deserialize)]
pub struct AskOutfitRequest {
    pub question: String,
}

fn cached_reading(state: &AppState, session: &CurrentSession) -> AppResult<WeatherReading> {
    state
        .sessions
        .with_session(&session.0.token, |s| s.last_reading.clone())
        .ok_or(AppError::Unauthorized)?
        .ok_or(AppError::NoReading)
}

/// Threshold-based suggestion for the cached reading
pub async fn get_outfit(
    State(state): State<AppState>,
    session: CurrentSession,
) -> AppResult<Json<OutfitResponse>> {
    let reading = cached_reading(&state, &session)?;

    Ok(Json(OutfitResponse {
        suggestion: simple_suggestion(reading.temperature_c).to_string(),
        city: reading.city,
    }))
}

/// Free-text AI suggestion for the cached reading
pub async fn ask_outfit(
    State(state): State<AppState>,
    session: CurrentSession,
    Json(body): Json<AskOutfitRequest>,
) -> AppResult<Json<OutfitAdvice>> {
    let question = body.question.trim();
    if question.is_empty() {
        return Err(AppError::Validation(
            "Please enter a question for the AI".to_string(),
        ));
    }

    let generator = state
        .cohere
        .clone()
        .ok_or(AppError::NotConfigured("The text-generation provider"))?;
    let reading = cached_reading(&state, &session)?;

    let service = OutfitService::new(generator);
    let advice = service.ai_suggestion(&reading, question).await;

    Ok(Json(advice))
}
