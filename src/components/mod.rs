pub mod add_to_playlist_dialog;
pub mod alert;
pub mod app;
pub mod auth_modal;
pub mod confirm_dialog;
pub mod course_details;
pub mod home_page;
pub mod major_details;
pub mod material_preview;
pub mod navbar;
pub mod playlist_details;
pub mod playlists;
pub mod professor_materials;
pub mod suggestions_form;
pub mod upload_modal;

pub use add_to_playlist_dialog::AddToPlaylistDialog;
pub use alert::{InlineAlert, Spinner, ToastView};
pub use app::App;
pub use auth_modal::AuthModal;
pub use confirm_dialog::ConfirmDeleteDialog;
pub use course_details::CourseDetails;
pub use home_page::HomePage;
pub use major_details::MajorDetails;
pub use material_preview::MaterialPreview;
pub use navbar::Navbar;
pub use playlist_details::PlaylistDetails;
pub use playlists::Playlists;
pub use professor_materials::ProfessorMaterials;
pub use suggestions_form::SuggestionsForm;
pub use upload_modal::UploadModal;
