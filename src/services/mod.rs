pub mod api_client;
pub mod auth_service;
pub mod catalog_service;
pub mod mock_catalog;
pub mod playlist_service;
pub mod suggestion_service;
pub mod token;
pub mod transport;
pub mod upload_service;

pub use api_client::{normalize_list, ApiClient};
pub use auth_service::SessionService;
pub use catalog_service::{filter_materials, group_by_college, CatalogService, CollegeGroup, DataSource, Sourced};
pub use playlist_service::{PlaylistService, PLAYLISTS_LOGIN_REQUIRED};
pub use suggestion_service::SuggestionService;
pub use token::decode_claims;
pub use transport::{ApiRequest, FormPart, GlooTransport, HttpMethod, RawResponse, RequestBody, Transport};
pub use upload_service::{UploadErrors, UploadFile, UploadForm, UploadService};
