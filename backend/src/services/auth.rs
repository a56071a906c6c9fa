//! Authentication service
//!
//! Account lifecycle is entirely the identity provider's business; this
//! service forwards to it and manages the local session that hangs off a
//! successful login or signup.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use shared::AuthIdentity;

use crate::error::{AppError, AppResult};
use crate::external::supabase::{AuthSession, SupabaseAuthClient};
use crate::services::session::{SessionStore, SessionToken};

/// Authentication service
#[derive(Clone)]
pub struct AuthService {
    provider: SupabaseAuthClient,
    sessions: Arc<SessionStore>,
}

impl AuthService {
    /// Create a new AuthService instance
    pub fn new(provider: SupabaseAuthClient, sessions: Arc<SessionStore>) -> Self {
        Self { provider, sessions }
    }

    /// Register an account with the provider and open a session for it
    pub async fn signup(
        &self,
        email: &str,
        password: &str,
        now: DateTime<Utc>,
    ) -> AppResult<(SessionToken, AuthIdentity)> {
        let auth = self.provider.sign_up(email, password).await?;
        Ok(self.open_session(auth, now))
    }

    /// Log in against the provider and open a session
    pub async fn login(
        &self,
        email: &str,
        password: &str,
        now: DateTime<Utc>,
    ) -> AppResult<(SessionToken, AuthIdentity)> {
        let auth = self.provider.sign_in(email, password).await?;
        Ok(self.open_session(auth, now))
    }

    /// Drop the session; the cached reading and identity go with it
    pub fn logout(&self, token: SessionToken) -> AppResult<()> {
        self.sessions
            .remove(&token)
            .map(|_| ())
            .ok_or(AppError::Unauthorized)
    }

    /// Forward a password change to the provider using the session's
    /// user-scoped token
    pub async fn change_password(&self, token: SessionToken, new_password: &str) -> AppResult<()> {
        let access_token = self
            .sessions
            .with_session(&token, |session| {
                session.identity.as_ref().map(|i| i.access_token.clone())
            })
            .flatten()
            .ok_or(AppError::Unauthorized)?;

        self.provider
            .update_password(&access_token, new_password)
            .await?;
        Ok(())
    }

    /// Delete the account at the provider, then drop the session
    pub async fn delete_account(&self, token: SessionToken) -> AppResult<()> {
        let user_id = self
            .sessions
            .with_session(&token, |session| {
                session.identity.as_ref().map(|i| i.user_id.clone())
            })
            .flatten()
            .ok_or(AppError::Unauthorized)?;

        self.provider.delete_user(&user_id).await?;
        self.sessions.remove(&token);
        Ok(())
    }

    fn open_session(&self, auth: AuthSession, now: DateTime<Utc>) -> (SessionToken, AuthIdentity) {
        let identity = AuthIdentity {
            user_id: auth.user.id,
            email: auth.user.email,
            access_token: auth.access_token,
            registered_at: auth.user.created_at,
        };
        let token = self.sessions.create(identity.clone(), now);
        tracing::info!("Opened session for {}", identity.email);
        (token, identity)
    }
}
