//! Session holder owned by a client instance.

use async_lock::RwLock;
use chrono::{DateTime, Utc};
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::auth::SessionState;

/// An established session. Replaced wholesale, never mutated.
#[derive(Clone)]
pub(crate) struct Session {
    token: String,
    established_at: DateTime<Utc>,
}

impl Session {
    pub(crate) fn new(token: String) -> Self {
        Self {
            token,
            established_at: Utc::now(),
        }
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("token", &"<redacted>")
            .field("established_at", &self.established_at)
            .finish()
    }
}

/// Holds the current session of one client (shared by its clones).
///
/// Reads and replacements are not coordinated beyond the lock: concurrent
/// re-authentications may each store a session, and the last one wins.
#[derive(Debug, Default)]
pub struct SessionStore {
    current: RwLock<Option<Session>>,
    authenticating: AtomicUsize,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that starts out with a known token (e.g. resumed from a
    /// previous run).
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            current: RwLock::new(Some(Session::new(token.into()))),
            authenticating: AtomicUsize::new(0),
        }
    }

    pub async fn state(&self) -> SessionState {
        if self.authenticating.load(Ordering::SeqCst) > 0 {
            return SessionState::Authenticating;
        }
        if self.current.read().await.is_some() {
            SessionState::Authenticated
        } else {
            SessionState::Unauthenticated
        }
    }

    /// When the current session was stored, if any.
    pub async fn established_at(&self) -> Option<DateTime<Utc>> {
        self.current.read().await.as_ref().map(|s| s.established_at)
    }

    /// Drop the current session.
    pub async fn clear(&self) {
        *self.current.write().await = None;
    }

    pub(crate) async fn token(&self) -> Option<String> {
        self.current.read().await.as_ref().map(|s| s.token.clone())
    }

    pub(crate) async fn replace(&self, session: Session) {
        *self.current.write().await = Some(session);
    }

    /// Mark an authentication as in flight until the guard drops.
    pub(crate) fn begin_authenticating(&self) -> AuthenticatingGuard<'_> {
        self.authenticating.fetch_add(1, Ordering::SeqCst);
        AuthenticatingGuard(&self.authenticating)
    }
}

pub(crate) struct AuthenticatingGuard<'a>(&'a AtomicUsize);

impl Drop for AuthenticatingGuard<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_state_transitions() {
        let store = SessionStore::new();
        assert_eq!(store.state().await, SessionState::Unauthenticated);
        assert!(store.token().await.is_none());

        {
            let _guard = store.begin_authenticating();
            assert_eq!(store.state().await, SessionState::Authenticating);
            store.replace(Session::new("t1".to_string())).await;
            assert_eq!(store.state().await, SessionState::Authenticating);
        }
        assert_eq!(store.state().await, SessionState::Authenticated);
        assert_eq!(store.token().await.as_deref(), Some("t1"));

        // Re-authentication while a session exists.
        {
            let _guard = store.begin_authenticating();
            assert_eq!(store.state().await, SessionState::Authenticating);
            store.replace(Session::new("t2".to_string())).await;
        }
        assert_eq!(store.token().await.as_deref(), Some("t2"));

        store.clear().await;
        assert_eq!(store.state().await, SessionState::Unauthenticated);
    }

    #[tokio::test]
    async fn test_overlapping_authentications() {
        let store = SessionStore::new();
        let a = store.begin_authenticating();
        let b = store.begin_authenticating();
        drop(a);
        assert_eq!(store.state().await, SessionState::Authenticating);
        drop(b);
        assert_eq!(store.state().await, SessionState::Unauthenticated);
    }

    #[tokio::test]
    async fn test_with_token() {
        let store = SessionStore::with_token("resumed");
        assert_eq!(store.state().await, SessionState::Authenticated);
        assert!(store.established_at().await.is_some());
        assert!(!format!("{store:?}").contains("resumed"));
    }
}
