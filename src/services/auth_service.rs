// ============================================================================
// SESSION SERVICE - login / register / logout and the persisted session
// ============================================================================

use crate::error::AppError;
use crate::models::{LoginRequest, RegisterRequest, Session};
use crate::services::api_client::ApiClient;
use crate::services::token::decode_claims;
use crate::services::transport::{GlooTransport, Transport};
use crate::state::AuthState;
use crate::utils::{
    load_json, save_json, validate_login, validate_registration, KeyValueStore, LocalStore,
    STORAGE_KEY_SESSION,
};

/// Owns the signed-in identity. Views get it through context, never a global.
///
/// Clones share the same [`AuthState`], so a login done through one clone is
/// visible to all of them.
#[derive(Clone)]
pub struct SessionService<S = LocalStore, T = GlooTransport> {
    api: ApiClient<T>,
    store: S,
    state: AuthState,
}

impl<S: KeyValueStore, T: Transport> SessionService<S, T> {
    pub fn new(api: ApiClient<T>, store: S) -> Self {
        Self { api, store, state: AuthState::new() }
    }

    pub fn state(&self) -> &AuthState {
        &self.state
    }

    pub fn api(&self) -> &ApiClient<T> {
        &self.api
    }

    /// Restores a session persisted by an earlier visit.
    ///
    /// Malformed or expired entries are dropped from storage without surfacing
    /// an error; the visitor simply starts signed out.
    pub fn restore(&self) -> Option<Session> {
        self.restore_at(chrono::Utc::now().timestamp())
    }

    pub fn restore_at(&self, now_unix: i64) -> Option<Session> {
        match load_json::<S, Session>(&self.store, STORAGE_KEY_SESSION) {
            Ok(Some(session)) if session.is_expired_at(now_unix) => {
                log::info!("⌛ stored session expired, discarding");
                self.discard_persisted();
                None
            }
            Ok(Some(session)) => {
                log::info!("✅ session restored for {}", session.email);
                self.state.set_session(session.clone());
                Some(session)
            }
            Ok(None) => None,
            Err(AppError::Parse(e)) => {
                log::warn!("⚠️ stored session is malformed ({}), discarding", e);
                self.discard_persisted();
                None
            }
            Err(e) => {
                log::warn!("⚠️ could not read stored session: {}", e);
                None
            }
        }
    }

    /// Signs in and persists the session.
    ///
    /// # Errors
    ///
    /// [`AppError::Validation`] for empty or malformed input, otherwise
    /// [`AppError::Auth`] for anything that keeps the login from completing:
    /// rejected credentials, an unreachable backend, or an unreadable token.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, AppError> {
        validate_login(email, password)?;

        let request = LoginRequest { email: email.trim().to_string(), password: password.to_string() };
        let response = self.api.login(&request).await.map_err(|e| match e {
            AppError::Http { status, message } => {
                log::warn!("🔐 login rejected ({})", status);
                AppError::Auth(non_generic(message).unwrap_or_else(|| "Login failed".into()))
            }
            AppError::Network(detail) => AppError::Auth(format!("Login failed: {}", detail)),
            other => AppError::Auth(format!("Login failed: {}", other)),
        })?;

        let claims = decode_claims(&response.access_token)?;
        let session = Session::from_claims(claims, response.access_token);

        if let Err(e) = save_json(&self.store, STORAGE_KEY_SESSION, &session) {
            log::warn!("⚠️ session not persisted: {}", e);
        }
        self.state.set_session(session.clone());
        log::info!("✅ signed in as {}", session.email);
        Ok(session)
    }

    /// Creates an account. Does not sign in.
    ///
    /// # Errors
    ///
    /// [`AppError::Validation`] for weak passwords, malformed email or a
    /// missing name (checked before any request, and for 400/422 answers),
    /// [`AppError::Conflict`] when the email is already registered.
    pub async fn register(&self, email: &str, full_name: &str, password: &str) -> Result<(), AppError> {
        validate_registration(email, full_name, password)?;

        let request = RegisterRequest {
            email: email.trim().to_string(),
            full_name: full_name.trim().to_string(),
            password: password.to_string(),
        };
        self.api.register(&request).await.map_err(|e| match e {
            AppError::Http { status: 409, message } => AppError::Conflict(
                non_generic(message).unwrap_or_else(|| "An account with this email already exists".into()),
            ),
            AppError::Http { status: 400 | 422, message } => {
                AppError::Validation(non_generic(message).unwrap_or_else(|| "Registration failed".into()))
            }
            AppError::Http { status, message } => AppError::Http {
                status,
                message: non_generic(message).unwrap_or_else(|| "Registration failed".into()),
            },
            other => other,
        })?;

        log::info!("📝 registered {}", request.email);
        Ok(())
    }

    /// Forgets the session in memory and in storage. Never fails.
    pub fn logout(&self) {
        self.state.clear();
        self.discard_persisted();
        log::info!("👋 signed out");
    }

    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated_at(chrono::Utc::now().timestamp())
    }

    pub fn is_authenticated_at(&self, now_unix: i64) -> bool {
        self.state.session_at(now_unix).is_some()
    }

    /// The signed-in user, or `None` once the session has expired.
    pub fn current(&self) -> Option<Session> {
        self.state.session()
    }

    /// Bearer token for protected calls, or `Auth(message)` when signed out.
    pub fn require_token(&self, message: &str) -> Result<String, AppError> {
        self.state.token().ok_or_else(|| AppError::Auth(message.to_string()))
    }

    fn discard_persisted(&self) {
        if let Err(e) = self.store.remove(STORAGE_KEY_SESSION) {
            log::warn!("⚠️ could not clear stored session: {}", e);
        }
    }
}

impl SessionService<LocalStore, GlooTransport> {
    /// Browser wiring: configured backend + localStorage.
    pub fn browser() -> Self {
        Self::new(ApiClient::new(), LocalStore)
    }
}

impl<S, T> PartialEq for SessionService<S, T> {
    fn eq(&self, other: &Self) -> bool {
        self.state.ptr_eq(&other.state)
    }
}

fn non_generic(message: String) -> Option<String> {
    if message.starts_with("API request failed") {
        None
    } else {
        Some(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::token::fake_token;
    use crate::services::transport::testing::ScriptedTransport;
    use crate::utils::MemoryStore;
    use futures::executor::block_on;
    use serde_json::json;

    fn service(transport: &ScriptedTransport, store: &MemoryStore) -> SessionService<MemoryStore, ScriptedTransport> {
        SessionService::new(ApiClient::with_transport(transport.clone()), store.clone())
    }

    fn token() -> String {
        fake_token(&json!({ "sub": "u-17", "email": "sara@pmu.edu" }))
    }

    #[test]
    fn valid_login_populates_and_persists_session() {
        let transport = ScriptedTransport::new().reply(200, json!({ "access_token": token() }));
        let store = MemoryStore::new();
        let svc = service(&transport, &store);

        let session = block_on(svc.login("sara@pmu.edu", "hunter22")).unwrap();
        assert_eq!(session.id, "u-17");
        assert_eq!(session.email, "sara@pmu.edu");
        assert!(svc.is_authenticated());

        let stored: Session = load_json(&store, STORAGE_KEY_SESSION).unwrap().unwrap();
        assert_eq!(stored, session);
    }

    #[test]
    fn invalid_credentials_leave_session_unset() {
        let transport = ScriptedTransport::new().reply(401, json!({ "message": "Invalid credentials" }));
        let store = MemoryStore::new();
        let svc = service(&transport, &store);

        let err = block_on(svc.login("sara@pmu.edu", "wrong")).unwrap_err();
        assert_eq!(err, AppError::Auth("Invalid credentials".into()));
        assert!(!svc.is_authenticated());
        assert!(store.is_empty());
    }

    #[test]
    fn unreachable_backend_is_an_auth_error() {
        let transport = ScriptedTransport::new().fail(AppError::Network("connection refused".into()));
        let svc = service(&transport, &MemoryStore::new());
        let err = block_on(svc.login("sara@pmu.edu", "hunter22")).unwrap_err();
        assert!(matches!(err, AppError::Auth(_)));
        assert!(svc.current().is_none());
    }

    #[test]
    fn malformed_email_is_rejected_before_any_request() {
        let transport = ScriptedTransport::new();
        let svc = service(&transport, &MemoryStore::new());
        let err = block_on(svc.login("not-an-email", "pw")).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(transport.request_count(), 0);
    }

    #[test]
    fn logout_clears_memory_and_storage() {
        let transport = ScriptedTransport::new().reply(200, json!({ "access_token": token() }));
        let store = MemoryStore::new();
        let svc = service(&transport, &store);
        block_on(svc.login("sara@pmu.edu", "hunter22")).unwrap();

        svc.logout();
        assert!(!svc.is_authenticated());
        assert!(store.get(STORAGE_KEY_SESSION).unwrap().is_none());

        // Idempotent.
        svc.logout();
        assert!(svc.current().is_none());
    }

    #[test]
    fn restore_reads_previous_session() {
        let store = MemoryStore::new();
        let saved = Session { id: "u1".into(), email: "a@pmu.edu".into(), token: "t".into(), expires_at: None };
        save_json(&store, STORAGE_KEY_SESSION, &saved).unwrap();

        let svc = service(&ScriptedTransport::new(), &store);
        assert_eq!(svc.restore(), Some(saved));
        assert!(svc.is_authenticated());
    }

    #[test]
    fn restore_discards_malformed_session_silently() {
        let store = MemoryStore::new();
        store.set(STORAGE_KEY_SESSION, "{\"id\": 3").unwrap();
        let svc = service(&ScriptedTransport::new(), &store);

        assert_eq!(svc.restore(), None);
        assert!(store.get(STORAGE_KEY_SESSION).unwrap().is_none());
    }

    #[test]
    fn restore_discards_expired_session() {
        let store = MemoryStore::new();
        let saved = Session { id: "u1".into(), email: "a@pmu.edu".into(), token: "t".into(), expires_at: Some(1_000) };
        save_json(&store, STORAGE_KEY_SESSION, &saved).unwrap();
        let svc = service(&ScriptedTransport::new(), &store);

        assert_eq!(svc.restore_at(2_000), None);
        assert!(store.is_empty());
    }

    #[test]
    fn relogin_overwrites_session_wholesale() {
        let other = fake_token(&json!({ "sub": "u-99", "email": "omar@pmu.edu" }));
        let transport = ScriptedTransport::new()
            .reply(200, json!({ "access_token": token() }))
            .reply(200, json!({ "access_token": other }));
        let store = MemoryStore::new();
        let svc = service(&transport, &store);

        block_on(svc.login("sara@pmu.edu", "hunter22")).unwrap();
        block_on(svc.login("omar@pmu.edu", "hunter22")).unwrap();
        let stored: Session = load_json(&store, STORAGE_KEY_SESSION).unwrap().unwrap();
        assert_eq!(stored.id, "u-99");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn duplicate_registration_is_conflict() {
        let transport = ScriptedTransport::new().reply(409, json!({ "message": "Email already in use" }));
        let svc = service(&transport, &MemoryStore::new());
        let err = block_on(svc.register("sara@pmu.edu", "Sara Ali", "secret1")).unwrap_err();
        assert_eq!(err, AppError::Conflict("Email already in use".into()));
    }

    #[test]
    fn weak_password_is_rejected_client_side() {
        let transport = ScriptedTransport::new();
        let svc = service(&transport, &MemoryStore::new());
        let err = block_on(svc.register("sara@pmu.edu", "Sara Ali", "123")).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(transport.request_count(), 0);
    }

    #[test]
    fn registration_sends_full_name_in_camel_case() {
        let transport = ScriptedTransport::new().reply(201, json!({ "id": "u-1" }));
        let svc = service(&transport, &MemoryStore::new());
        block_on(svc.register(" sara@pmu.edu ", "Sara Ali", "secret1")).unwrap();
        let req = transport.last_request().unwrap();
        assert_eq!(req.path, "/auth/register");
        assert_eq!(
            req.body,
            crate::services::transport::RequestBody::Json(json!({
                "email": "sara@pmu.edu", "fullName": "Sara Ali", "password": "secret1"
            }))
        );
        assert!(!svc.is_authenticated());
    }

    #[test]
    fn session_that_expires_while_open_is_treated_as_signed_out() {
        let svc = service(&ScriptedTransport::new(), &MemoryStore::new());
        svc.state().set_session(Session { id: "u1".into(), email: "a@pmu.edu".into(), token: "t".into(), expires_at: Some(1) });
        assert!(!svc.is_authenticated());
        assert!(svc.current().is_none());
        assert!(matches!(svc.require_token("sign in"), Err(AppError::Auth(_))));
    }

    #[test]
    fn require_token_reports_signed_out() {
        let svc = service(&ScriptedTransport::new(), &MemoryStore::new());
        assert_eq!(
            svc.require_token("You must be logged in to view playlists"),
            Err(AppError::Auth("You must be logged in to view playlists".into()))
        );
    }
}
