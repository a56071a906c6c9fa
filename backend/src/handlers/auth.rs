//! Authentication handlers

use axum::{extract::State, http::StatusCode, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::CurrentSession;
use crate::services::AuthService;
use crate::AppState;

#[derive(Debug, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct SessionResponse {
    pub session_token: String,
    pub email: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct ChangePasswordRequest {
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub new_password: String,
    pub confirm_password: String,
}

#[derive(Serialize)]
pub struct ProfileResponse {
    pub email: String,
    pub credits_remaining: u32,
    pub registered_at: Option<DateTime<Utc>>,
}

fn auth_service(state: &AppState) -> AppResult<AuthService> {
    let provider = state
        .auth
        .clone()
        .ok_or(AppError::NotConfigured("The identity provider"))?;
    Ok(AuthService::new(provider, state.sessions.clone()))
}

/// Signup endpoint handler
pub async fn signup(
    State(state): State<AppState>,
    Json(body): Json<SignupRequest>,
) -> AppResult<(StatusCode, Json<SessionResponse>)> {
    body.validate()?;

    let service = auth_service(&state)?;
    let (token, identity) = service.signup(&body.email, &body.password, Utc::now()).await?;

    Ok((
        StatusCode::CREATED,
        Json(SessionResponse {
            session_token: token.to_string(),
            email: identity.email,
        }),
    ))
}

/// Login endpoint handler
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> AppResult<Json<SessionResponse>> {
    let service = auth_service(&state)?;
    let (token, identity) = service.login(&body.email, &body.password, Utc::now()).await?;

    Ok(Json(SessionResponse {
        session_token: token.to_string(),
        email: identity.email,
    }))
}

/// Logout endpoint handler
pub async fn logout(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
) -> AppResult<StatusCode> {
    let service = auth_service(&state)?;
    service.logout(session.token)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Password change endpoint handler
pub async fn change_password(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    Json(body): Json<ChangePasswordRequest>,
) -> AppResult<StatusCode> {
    if body.new_password != body.confirm_password {
        return Err(AppError::Validation("Passwords do not match".to_string()));
    }
    body.validate()?;

    let service = auth_service(&state)?;
    service
        .change_password(session.token, &body.new_password)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Account deletion endpoint handler
pub async fn delete_account(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
) -> AppResult<StatusCode> {
    let service = auth_service(&state)?;
    service.delete_account(session.token).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Profile view: email, remaining credits, registration date
pub async fn get_profile(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
) -> AppResult<Json<ProfileResponse>> {
    let now = Utc::now();
    let credits_remaining = state
        .sessions
        .with_session(&session.token, |s| {
            s.credits.maybe_reset(now);
            s.credits.balance()
        })
        .ok_or(AppError::Unauthorized)?;

    Ok(Json(ProfileResponse {
        email: session.identity.email,
        credits_remaining,
        registered_at: session.identity.registered_at,
    }))
}
