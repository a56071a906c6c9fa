//! Per-visit session state

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::credits::CreditAccount;
use crate::models::weather::WeatherReading;

/// Reference to an account held by the external identity provider.
///
/// The provider owns the account lifecycle; this is just enough to address it
/// on follow-up calls and to render the profile view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthIdentity {
    /// Provider-assigned user id
    pub user_id: String,
    pub email: String,
    /// Provider access token for user-scoped calls (password change)
    pub access_token: String,
    /// When the account was registered, if the provider reports it
    pub registered_at: Option<DateTime<Utc>>,
}

/// Everything the service remembers about one user visit.
///
/// Lives only in process memory; dropped on logout, account deletion, or
/// restart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Session {
    /// Lookup allowance for this visit
    pub credits: CreditAccount,
    /// Authenticated identity, if login succeeded
    pub identity: Option<AuthIdentity>,
    /// Size-1 cache of the latest reading, overwritten per lookup
    pub last_reading: Option<WeatherReading>,
}

impl Session {
    /// An unauthenticated session with a full allowance.
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            credits: CreditAccount::new(now),
            identity: None,
            last_reading: None,
        }
    }

    /// A session opened by a successful login or signup.
    pub fn authenticated(identity: AuthIdentity, now: DateTime<Utc>) -> Self {
        Self {
            identity: Some(identity),
            ..Self::new(now)
        }
    }
}
