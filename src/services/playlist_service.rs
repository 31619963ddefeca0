// ============================================================================
// PLAYLIST SERVICE - the signed-in user's material collections
// ============================================================================

use crate::error::AppError;
use crate::models::{AddMaterialRequest, Material, Playlist};
use crate::services::api_client::ApiClient;
use crate::services::transport::{GlooTransport, Transport};
use crate::state::AuthState;

pub const PLAYLISTS_LOGIN_REQUIRED: &str = "You must be logged in to view playlists";

/// Every call needs a session; the bearer token is read at call time.
#[derive(Clone)]
pub struct PlaylistService<T = GlooTransport> {
    api: ApiClient<T>,
    auth: AuthState,
}

impl<T: Transport> PlaylistService<T> {
    pub fn new(api: ApiClient<T>, auth: AuthState) -> Self {
        Self { api, auth }
    }

    fn token(&self) -> Result<String, AppError> {
        self.auth
            .token()
            .ok_or_else(|| AppError::Auth(PLAYLISTS_LOGIN_REQUIRED.to_string()))
    }

    pub async fn list(&self) -> Result<Vec<Playlist>, AppError> {
        let token = self.token()?;
        self.api.playlists(&token).await
    }

    pub async fn get(&self, playlist_id: &str) -> Result<Playlist, AppError> {
        let token = self.token()?;
        self.api.playlist(&token, playlist_id).await
    }

    /// # Errors
    ///
    /// `Validation` for a blank name (no request is made).
    pub async fn create(&self, name: &str) -> Result<Playlist, AppError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::Validation("Please enter a playlist name".into()));
        }
        let token = self.token()?;
        let playlist = self.api.create_playlist(&token, name).await?;
        log::info!("🎵 playlist '{}' created", playlist.name);
        Ok(playlist)
    }

    pub async fn delete(&self, playlist_id: &str) -> Result<(), AppError> {
        let token = self.token()?;
        self.api.delete_playlist(&token, playlist_id).await?;
        log::info!("🗑️ playlist {} deleted", playlist_id);
        Ok(())
    }

    pub async fn add_material(&self, playlist_id: &str, material: &Material) -> Result<(), AppError> {
        let token = self.token()?;
        let body = AddMaterialRequest::from(material);
        self.api.add_to_playlist(&token, playlist_id, &body).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Session;
    use crate::services::transport::testing::ScriptedTransport;
    use crate::services::transport::{HttpMethod, RequestBody};
    use futures::executor::block_on;
    use serde_json::json;

    fn signed_in() -> AuthState {
        let auth = AuthState::new();
        auth.set_session(Session { id: "u1".into(), email: "a@pmu.edu".into(), token: "tok".into(), expires_at: None });
        auth
    }

    fn service(transport: &ScriptedTransport, auth: AuthState) -> PlaylistService<ScriptedTransport> {
        PlaylistService::new(ApiClient::with_transport(transport.clone()), auth)
    }

    #[test]
    fn signed_out_listing_makes_no_request() {
        let transport = ScriptedTransport::new();
        let err = block_on(service(&transport, AuthState::new()).list()).unwrap_err();
        assert_eq!(err.user_message(), PLAYLISTS_LOGIN_REQUIRED);
        assert_eq!(transport.request_count(), 0);
    }

    #[test]
    fn expired_session_sends_no_bearer_request() {
        let auth = AuthState::new();
        auth.set_session(Session { id: "u1".into(), email: "a@pmu.edu".into(), token: "old".into(), expires_at: Some(1) });
        let transport = ScriptedTransport::new();
        let err = block_on(service(&transport, auth).delete("p1")).unwrap_err();
        assert_eq!(err, AppError::Auth(PLAYLISTS_LOGIN_REQUIRED.into()));
        assert_eq!(transport.request_count(), 0);
    }

    #[test]
    fn blank_name_is_rejected_before_any_request() {
        let transport = ScriptedTransport::new();
        let err = block_on(service(&transport, signed_in()).create("   ")).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(transport.request_count(), 0);
    }

    #[test]
    fn create_posts_trimmed_name_with_bearer() {
        let transport = ScriptedTransport::new().reply(201, json!({ "id": "p9", "name": "Finals" }));
        let playlist = block_on(service(&transport, signed_in()).create(" Finals ")).unwrap();
        assert_eq!(playlist.id, "p9");
        let req = transport.last_request().unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.bearer.as_deref(), Some("tok"));
        assert_eq!(req.body, RequestBody::Json(json!({ "name": "Finals" })));
    }

    #[test]
    fn add_material_falls_back_to_file_name_title() {
        let transport = ScriptedTransport::new().reply(201, json!({}));
        let material = Material {
            title: None,
            material_type: Some("notes".into()),
            data: "https://cdn.pmu.edu/1741735085446-lab_04_Pointers.pdf".into(),
            ..Default::default()
        };
        block_on(service(&transport, signed_in()).add_material("p1", &material)).unwrap();
        let req = transport.last_request().unwrap();
        assert_eq!(req.path, "/playlists/p1/materials");
        assert_eq!(
            req.body,
            RequestBody::Json(json!({
                "title": "lab 04 Pointers",
                "type": "notes",
                "data": "https://cdn.pmu.edu/1741735085446-lab_04_Pointers.pdf"
            }))
        );
    }
}
