//! Checkout handler

use axum::{extract::State, Json};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::CurrentSession;
use crate::services::CheckoutService;
use crate::AppState;

#[derive(Serialize)]
pub struct CheckoutResponse {
    pub checkout_url: String,
}

/// Open a hosted checkout session for the credit pack
pub async fn create_checkout_session(
    State(state): State<AppState>,
    CurrentSession(_session): CurrentSession,
) -> AppResult<Json<CheckoutResponse>> {
    let gateway = state
        .stripe
        .clone()
        .ok_or(AppError::NotConfigured("The payments provider"))?;

    let service = CheckoutService::new(gateway);
    let checkout_url = service.create_session().await?;

    Ok(Json(CheckoutResponse { checkout_url }))
}
