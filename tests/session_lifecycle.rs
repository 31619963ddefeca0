//! Session lifecycle through the public API: restore, login, reload, logout.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use futures::executor::block_on;
use serde_json::json;

use campus_materials::models::Session;
use campus_materials::services::{ApiClient, ApiRequest, PlaylistService, RawResponse, SessionService, Transport};
use campus_materials::utils::{KeyValueStore, MemoryStore, STORAGE_KEY_SESSION};
use campus_materials::AppError;

#[derive(Clone, Default)]
struct Backend {
    replies: Rc<RefCell<VecDeque<RawResponse>>>,
    seen: Rc<RefCell<Vec<ApiRequest>>>,
}

impl Backend {
    fn reply(&self, status: u16, body: serde_json::Value) {
        self.replies.borrow_mut().push_back(RawResponse { status, body: body.to_string() });
    }
}

impl Transport for Backend {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, AppError> {
        self.seen.borrow_mut().push(request);
        self.replies
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| AppError::Network("backend offline".into()))
    }
}

fn token_for(sub: &str, email: &str, exp: i64) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256"}"#);
    let payload = URL_SAFE_NO_PAD.encode(json!({ "sub": sub, "email": email, "exp": exp }).to_string());
    format!("{}.{}.sig", header, payload)
}

fn session_service(backend: &Backend, store: &MemoryStore) -> SessionService<MemoryStore, Backend> {
    SessionService::new(ApiClient::with_transport(backend.clone()), store.clone())
}

#[test]
fn login_survives_reload_and_logout_forgets_it() {
    let backend = Backend::default();
    let store = MemoryStore::new();
    let far_future = 4_102_444_800; // 2100-01-01

    // First visit: nothing stored.
    let first = session_service(&backend, &store);
    assert_eq!(first.restore(), None);
    assert!(!first.is_authenticated());

    backend.reply(200, json!({ "access_token": token_for("u-7", "lina@pmu.edu", far_future) }));
    let session = block_on(first.login("lina@pmu.edu", "secret1")).expect("login");
    assert_eq!(session.email, "lina@pmu.edu");
    assert!(store.get(STORAGE_KEY_SESSION).unwrap().is_some());

    // Reload: a fresh service restores from storage.
    let second = session_service(&backend, &store);
    let restored = second.restore().expect("restored session");
    assert_eq!(restored, session);
    assert!(second.is_authenticated());

    // Protected calls carry the restored token.
    backend.reply(200, json!([{ "id": "p1", "name": "Finals" }]));
    let playlists = PlaylistService::new(second.api().clone(), second.state().clone());
    let listed = block_on(playlists.list()).expect("playlists");
    assert_eq!(listed.len(), 1);
    let last = backend.seen.borrow().last().cloned().unwrap();
    assert_eq!(last.bearer.as_deref(), Some(session.token.as_str()));

    second.logout();
    assert!(!second.is_authenticated());
    assert!(store.is_empty());
    assert_eq!(session_service(&backend, &store).restore(), None);

    // Signed out again: protected calls fail locally.
    let requests_before = backend.seen.borrow().len();
    assert!(matches!(block_on(playlists.list()), Err(AppError::Auth(_))));
    assert_eq!(backend.seen.borrow().len(), requests_before);
}

#[test]
fn rejected_login_keeps_previous_state_untouched() {
    let backend = Backend::default();
    let store = MemoryStore::new();
    let service = session_service(&backend, &store);

    backend.reply(401, json!({ "message": "Invalid email or password" }));
    let err = block_on(service.login("lina@pmu.edu", "wrong-pass")).unwrap_err();
    assert_eq!(err, AppError::Auth("Invalid email or password".into()));
    assert!(service.current().is_none());
    assert!(store.is_empty());
}

#[test]
fn expired_session_is_not_restored() {
    let store = MemoryStore::new();
    let stale = Session { id: "u-1".into(), email: "old@pmu.edu".into(), token: "t".into(), expires_at: Some(1) };
    store.set(STORAGE_KEY_SESSION, &serde_json::to_string(&stale).unwrap()).unwrap();

    let service = session_service(&Backend::default(), &store);
    assert_eq!(service.restore(), None);
    assert!(store.get(STORAGE_KEY_SESSION).unwrap().is_none());
}
