//! Session authentication middleware
//!
//! Every protected route sits behind a bearer session token issued at login.
//! The guard resolves the token against the session store and stashes the
//! caller's context in request extensions.

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use uuid::Uuid;

use shared::AuthIdentity;

use crate::error::ErrorResponse;
use crate::services::session::SessionToken;
use crate::AppState;

/// The caller's resolved session, inserted by [`session_guard`]
#[derive(Clone, Debug)]
pub struct SessionContext {
    pub token: SessionToken,
    pub identity: AuthIdentity,
}

/// Middleware that validates the bearer session token
pub async fn session_guard(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let raw_token = match auth_header {
        Some(header) if header.starts_with("Bearer ") => &header[7..],
        _ => {
            return unauthorized_response("Missing or invalid Authorization header");
        }
    };

    let token: SessionToken = match Uuid::parse_str(raw_token.trim()) {
        Ok(token) => token,
        Err(_) => return unauthorized_response("Invalid session token"),
    };

    let identity = match state
        .sessions
        .with_session(&token, |session| session.identity.clone())
    {
        Some(Some(identity)) => identity,
        _ => return unauthorized_response("Session expired or not found"),
    };

    request
        .extensions_mut()
        .insert(SessionContext { token, identity });

    next.run(request).await
}

/// Create unauthorized response
fn unauthorized_response(message: &str) -> Response {
    let error = ErrorResponse {
        error: message.to_string(),
    };

    (StatusCode::UNAUTHORIZED, Json(error)).into_response()
}

/// Extractor for the current session
/// Use this in handlers to get the caller's session context
#[derive(Clone, Debug)]
pub struct CurrentSession(pub SessionContext);

#[axum::async_trait]
impl<S> axum::extract::FromRequestParts<S> for CurrentSession
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<ErrorResponse>);

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<SessionContext>()
            .cloned()
            .map(CurrentSession)
            .ok_or_else(|| {
                let error = ErrorResponse {
                    error: "Authentication required".to_string(),
                };
                (StatusCode::UNAUTHORIZED, Json(error))
            })
    }
}
