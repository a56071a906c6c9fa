//! Error handling for the Weather Stylist service
//!
//! Every external-call failure is caught at the call site and rendered as a
//! `{"error": string}` body; nothing propagates as a fatal process error.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::external::{weather::LookupError, GatewayError};

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Authentication required")]
    Unauthorized,

    #[error("Out of credits.")]
    OutOfCredits,

    #[error("{0}")]
    Validation(String),

    #[error("No weather data yet. Fetch the weather first.")]
    NoReading,

    #[error("{0} is not configured on this server")]
    NotConfigured(&'static str),

    // External service errors
    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .into_iter()
            .flat_map(|(_, errs)| errs.iter())
            .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .next()
            .unwrap_or_else(|| "Invalid request".to_string());
        AppError::Validation(message)
    }
}

/// Error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::OutOfCredits => StatusCode::TOO_MANY_REQUESTS,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NoReading => StatusCode::NOT_FOUND,
            AppError::NotConfigured(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Lookup(LookupError::ProviderRejected) => StatusCode::BAD_REQUEST,
            AppError::Lookup(LookupError::ProviderUnavailable) => StatusCode::BAD_GATEWAY,
            AppError::Gateway(_) => StatusCode::BAD_GATEWAY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Log the error for debugging
        tracing::error!("Error: {:?}", self);

        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
