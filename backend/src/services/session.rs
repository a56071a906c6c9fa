//! In-memory session store
//!
//! Sessions are keyed by an opaque token handed to the client at login and
//! live only for the process lifetime. The store is the single piece of
//! shared state in the whole service; handlers receive it through `AppState`
//! and mutate a session inside one closure per step.

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use shared::{AuthIdentity, Session};

/// Opaque per-visit session token
pub type SessionToken = Uuid;

/// Volatile store of all live sessions
#[derive(Default)]
pub struct SessionStore {
    inner: RwLock<HashMap<SessionToken, Session>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a session for a freshly authenticated identity and hand back its
    /// token. The session starts with a full credit allowance anchored at
    /// `now`.
    pub fn create(&self, identity: AuthIdentity, now: DateTime<Utc>) -> SessionToken {
        let token = Uuid::new_v4();
        self.inner
            .write()
            .expect("session store poisoned")
            .insert(token, Session::authenticated(identity, now));
        token
    }

    /// Run `f` against the session behind `token`, if it exists.
    pub fn with_session<T>(
        &self,
        token: &SessionToken,
        f: impl FnOnce(&mut Session) -> T,
    ) -> Option<T> {
        self.inner
            .write()
            .expect("session store poisoned")
            .get_mut(token)
            .map(f)
    }

    /// Clone the session behind `token`, if it exists.
    pub fn snapshot(&self, token: &SessionToken) -> Option<Session> {
        self.inner
            .read()
            .expect("session store poisoned")
            .get(token)
            .cloned()
    }

    /// Drop a session, returning its final state. Clears the cached reading
    /// and identity along with it.
    pub fn remove(&self, token: &SessionToken) -> Option<Session> {
        self.inner
            .write()
            .expect("session store poisoned")
            .remove(token)
    }

    /// Number of live sessions
    pub fn len(&self) -> usize {
        self.inner.read().expect("session store poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use shared::CREDIT_CAP;

    fn identity() -> AuthIdentity {
        AuthIdentity {
            user_id: "user-1".to_string(),
            email: "user@example.com".to_string(),
            access_token: "token".to_string(),
            registered_at: None,
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn create_seeds_full_allowance() {
        let store = SessionStore::new();
        let token = store.create(identity(), now());

        let session = store.snapshot(&token).unwrap();
        assert_eq!(session.credits.balance(), CREDIT_CAP);
        assert_eq!(session.identity.unwrap().email, "user@example.com");
        assert!(session.last_reading.is_none());
    }

    #[test]
    fn remove_forgets_the_session() {
        let store = SessionStore::new();
        let token = store.create(identity(), now());
        assert!(store.remove(&token).is_some());
        assert!(store.snapshot(&token).is_none());
        assert!(store.with_session(&token, |_| ()).is_none());
    }

    #[test]
    fn unknown_token_yields_nothing() {
        let store = SessionStore::new();
        assert!(store.snapshot(&Uuid::new_v4()).is_none());
    }
}
