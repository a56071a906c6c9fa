//! Health check handlers

use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub components: ComponentStatus,
}

/// Which provider-backed components are configured on this deployment
#[derive(Serialize)]
pub struct ComponentStatus {
    pub weather: bool,
    pub auth: bool,
    pub checkout: bool,
    pub ai: bool,
}

/// Health check endpoint handler
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        components: ComponentStatus {
            weather: state.weather.is_some(),
            auth: state.auth.is_some(),
            checkout: state.stripe.is_some(),
            ai: state.cohere.is_some(),
        },
    })
}
