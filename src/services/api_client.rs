// ============================================================================
// API CLIENT - typed access to the REST backend (stateless)
// ============================================================================
// Every view goes through `fetch_json` / `fetch_list`: status check, JSON
// parse, and the single-object-or-array normalization in one place.
// ============================================================================

use serde::de::DeserializeOwned;
use serde::Deserialize;
use urlencoding::encode;

use crate::config::CONFIG;
use crate::error::AppError;
use crate::models::{
    AddMaterialRequest, Course, ErrorBody, LoginRequest, LoginResponse, Major, Material,
    MaterialKind, NewPlaylist, Playlist, RegisterRequest, Suggestion,
};
use crate::services::transport::{ApiRequest, FormPart, GlooTransport, RawResponse, Transport};

/// The backend sometimes answers a collection endpoint with a bare object.
#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> From<OneOrMany<T>> for Vec<T> {
    fn from(value: OneOrMany<T>) -> Self {
        match value {
            OneOrMany::Many(items) => items,
            OneOrMany::One(item) => vec![item],
        }
    }
}

/// Parses a collection body, coercing a single object to a one-element list.
pub fn normalize_list<T: DeserializeOwned>(body: &str) -> Result<Vec<T>, AppError> {
    let parsed: OneOrMany<T> = serde_json::from_str(body)?;
    Ok(parsed.into())
}

fn error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body).ok().and_then(|b| b.message)
}

fn ensure_success(response: RawResponse) -> Result<RawResponse, AppError> {
    if response.is_success() {
        Ok(response)
    } else {
        Err(AppError::http(response.status, error_message(&response.body)))
    }
}

/// Typed REST client; generic over the transport so tests can script replies.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient<T = GlooTransport> {
    transport: T,
}

impl ApiClient<GlooTransport> {
    /// Client for the configured backend.
    pub fn new() -> Self {
        Self::with_transport(GlooTransport::new(CONFIG.api_url.clone()))
    }
}

impl Default for ApiClient<GlooTransport> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Sends a request and fails with `Http` on a non-2xx status.
    pub async fn send(&self, request: ApiRequest) -> Result<RawResponse, AppError> {
        let path = request.path.clone();
        let response = self.transport.send(request).await?;
        ensure_success(response).map_err(|e| {
            log::warn!("⚠️ {} failed: {}", path, e);
            e
        })
    }

    /// Generic typed fetch: status check then JSON parse.
    pub async fn fetch_json<R: DeserializeOwned>(&self, request: ApiRequest) -> Result<R, AppError> {
        let response = self.send(request).await?;
        serde_json::from_str(&response.body).map_err(Into::into)
    }

    /// Like [`fetch_json`](Self::fetch_json) for collections, with normalization.
    pub async fn fetch_list<R: DeserializeOwned>(&self, request: ApiRequest) -> Result<Vec<R>, AppError> {
        let response = self.send(request).await?;
        normalize_list(&response.body)
    }

    /// For mutations whose response body is ignored.
    pub async fn send_unit(&self, request: ApiRequest) -> Result<(), AppError> {
        self.send(request).await.map(|_| ())
    }

    // ---- catalog -----------------------------------------------------------

    pub async fn majors(&self) -> Result<Vec<Major>, AppError> {
        self.fetch_list(ApiRequest::get("/majors")).await
    }

    pub async fn courses_for_major(&self, major_title: &str) -> Result<Vec<Course>, AppError> {
        self.fetch_list(ApiRequest::get(format!("/{}/courses", encode(major_title))))
            .await
    }

    pub async fn course(&self, course_id: &str) -> Result<Course, AppError> {
        self.fetch_json(ApiRequest::get(format!("/courses/{}", encode(course_id))))
            .await
    }

    pub async fn materials(
        &self,
        major_title: &str,
        course_name: &str,
        professor_name: &str,
        kind: MaterialKind,
    ) -> Result<Vec<Material>, AppError> {
        let path = format!(
            "/{}/{}/{}/{}",
            encode(major_title),
            encode(course_name),
            encode(professor_name),
            kind.as_str()
        );
        self.fetch_list(ApiRequest::get(path)).await
    }

    // ---- auth --------------------------------------------------------------

    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, AppError> {
        self.fetch_json(ApiRequest::post("/auth/login").json(request)?).await
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<(), AppError> {
        self.send_unit(ApiRequest::post("/auth/register").json(request)?).await
    }

    // ---- playlists ---------------------------------------------------------

    pub async fn playlists(&self, token: &str) -> Result<Vec<Playlist>, AppError> {
        self.fetch_list(ApiRequest::get("/playlists").bearer(token)).await
    }

    pub async fn create_playlist(&self, token: &str, name: &str) -> Result<Playlist, AppError> {
        let body = NewPlaylist { name: name.to_string() };
        self.fetch_json(ApiRequest::post("/playlists").bearer(token).json(&body)?)
            .await
    }

    pub async fn playlist(&self, token: &str, playlist_id: &str) -> Result<Playlist, AppError> {
        self.fetch_json(ApiRequest::get(format!("/playlists/{}", encode(playlist_id))).bearer(token))
            .await
    }

    pub async fn delete_playlist(&self, token: &str, playlist_id: &str) -> Result<(), AppError> {
        self.send_unit(ApiRequest::delete(format!("/playlists/{}", encode(playlist_id))).bearer(token))
            .await
    }

    pub async fn add_to_playlist(
        &self,
        token: &str,
        playlist_id: &str,
        material: &AddMaterialRequest,
    ) -> Result<(), AppError> {
        let path = format!("/playlists/{}/materials", encode(playlist_id));
        self.send_unit(ApiRequest::post(path).bearer(token).json(material)?)
            .await
    }

    // ---- moderation queue / feedback -----------------------------------------

    /// Uploads go to the approvals queue; nothing is published directly.
    pub async fn submit_for_approval(&self, token: &str, parts: Vec<FormPart>) -> Result<(), AppError> {
        self.send_unit(ApiRequest::post("/approvals").bearer(token).multipart(parts))
            .await
    }

    pub async fn submit_suggestion(&self, suggestion: &Suggestion) -> Result<(), AppError> {
        self.send_unit(ApiRequest::post("/suggestions").json(suggestion)?).await
    }
}
