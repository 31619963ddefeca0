pub mod auth;
pub mod catalog;
pub mod material;
pub mod playlist;
pub mod session;
pub mod suggestion;

pub use auth::{ErrorBody, LoginRequest, LoginResponse, RegisterRequest};
pub use catalog::{Course, Major, Professor};
pub use material::{Material, MaterialContent, MaterialKind};
pub use playlist::{AddMaterialRequest, NewPlaylist, Playlist, PlaylistMaterial};
pub use session::{Session, TokenClaims};
pub use suggestion::Suggestion;
