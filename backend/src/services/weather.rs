//! Weather lookup service
//!
//! Ties the credit gate, the provider call, and the session's size-1 reading
//! cache together. The caller injects `now` so the credit arithmetic stays a
//! pure function of time.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use shared::WeatherReading;

use crate::error::{AppError, AppResult};
use crate::external::weather::WeatherClient;
use crate::services::session::{SessionStore, SessionToken};

/// Weather lookup service
#[derive(Clone)]
pub struct WeatherService {
    client: WeatherClient,
    sessions: Arc<SessionStore>,
}

impl WeatherService {
    /// Create a new WeatherService instance
    pub fn new(client: WeatherClient, sessions: Arc<SessionStore>) -> Self {
        Self { client, sessions }
    }

    /// Perform one credit-gated lookup for the session behind `token`.
    ///
    /// The gate is a single `try_consume`; a lookup that passes it but fails
    /// at the provider restores the credit, so only successful lookups spend
    /// allowance. The reading replaces the session's cached one.
    pub async fn lookup(
        &self,
        token: SessionToken,
        city: &str,
        now: DateTime<Utc>,
    ) -> AppResult<WeatherReading> {
        let permitted = self
            .sessions
            .with_session(&token, |session| {
                session.credits.maybe_reset(now);
                session.credits.try_consume()
            })
            .ok_or(AppError::Unauthorized)?;

        if !permitted {
            return Err(AppError::OutOfCredits);
        }

        match self.client.fetch(city).await {
            Ok(reading) => {
                self.sessions.with_session(&token, |session| {
                    session.last_reading = Some(reading.clone());
                });
                tracing::debug!("Weather fetched for {}", reading.city);
                Ok(reading)
            }
            Err(err) => {
                self.sessions.with_session(&token, |session| {
                    session.credits.restore();
                });
                Err(err.into())
            }
        }
    }
}
