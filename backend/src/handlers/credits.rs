//! Credit status handler

use axum::{extract::State, Json};
use chrono::Utc;
use serde::Serialize;

use shared::CREDIT_CAP;

use crate::error::{AppError, AppResult};
use crate::middleware::CurrentSession;
use crate::AppState;

/// Allowance status for display
#[derive(Debug, Serialize)]
pub struct CreditStatus {
    pub balance: u32,
    pub cap: u32,
    /// Seconds until the allowance refills, clamped to zero
    pub reset_in_seconds: i64,
}

/// Report the session's remaining allowance and time to the next reset
pub async fn get_credits(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
) -> AppResult<Json<CreditStatus>> {
    let now = Utc::now();
    let status = state
        .sessions
        .with_session(&session.token, |s| {
            s.credits.maybe_reset(now);
            CreditStatus {
                balance: s.credits.balance(),
                cap: CREDIT_CAP,
                reset_in_seconds: s.credits.time_until_reset(now).num_seconds(),
            }
        })
        .ok_or(AppError::Unauthorized)?;

    Ok(Json(status))
}
