pub mod materials_viewmodel;
pub mod playlist_viewmodel;

pub use materials_viewmodel::MaterialsViewModel;
pub use playlist_viewmodel::{PlaylistListViewModel, PlaylistPickerViewModel};
