// ============================================================================
// AUTH STATE - the one shared piece of state: who is signed in
// ============================================================================

use crate::models::Session;
use crate::state::reactivity::{Observable, SubscriptionId};

/// Current session. Clones share it; only login/logout write to it.
#[derive(Clone)]
pub struct AuthState {
    session: Observable<Option<Session>>,
}

impl AuthState {
    pub fn new() -> Self {
        Self { session: Observable::new(None) }
    }

    /// The session, unless its `exp` has passed.
    pub fn session(&self) -> Option<Session> {
        self.session_at(chrono::Utc::now().timestamp())
    }

    pub fn session_at(&self, now_unix: i64) -> Option<Session> {
        self.session
            .with(|s| s.as_ref().filter(|s| !s.is_expired_at(now_unix)).cloned())
    }

    /// Bearer token of a live session. An expired token is never handed out.
    pub fn token(&self) -> Option<String> {
        self.token_at(chrono::Utc::now().timestamp())
    }

    pub fn token_at(&self, now_unix: i64) -> Option<String> {
        self.session_at(now_unix).map(|s| s.token)
    }

    /// Replaces the session wholesale.
    pub fn set_session(&self, session: Session) {
        self.session.set(Some(session));
    }

    pub fn clear(&self) {
        self.session.set(None);
    }

    pub fn subscribe(&self, callback: impl Fn() + 'static) -> SubscriptionId {
        self.session.subscribe(callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.session.unsubscribe(id);
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        self.session.ptr_eq(&other.session)
    }
}

impl Default for AuthState {
    fn default() -> Self {
        Self::new()
    }
}
