// ============================================================================
// PLAYLIST VIEWMODELS - local list edits for the playlist screens
// ============================================================================
// Pure state transitions; the components own the async calls and hand the
// outcome here.
// ============================================================================

use crate::models::Playlist;

/// The "My Playlists" page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlaylistListViewModel {
    playlists: Vec<Playlist>,
}

impl PlaylistListViewModel {
    pub fn new(playlists: Vec<Playlist>) -> Self {
        Self { playlists }
    }

    pub fn playlists(&self) -> &[Playlist] {
        &self.playlists
    }

    pub fn is_empty(&self) -> bool {
        self.playlists.is_empty()
    }

    /// Drops a deleted playlist from the visible list. No refetch.
    pub fn removed(&self, playlist_id: &str) -> Self {
        Self {
            playlists: self
                .playlists
                .iter()
                .filter(|p| p.id != playlist_id)
                .cloned()
                .collect(),
        }
    }
}

/// The add-to-playlist dialog on the materials page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlaylistPickerViewModel {
    pub playlists: Vec<Playlist>,
    pub selected: Option<String>,
}

impl PlaylistPickerViewModel {
    pub fn new(playlists: Vec<Playlist>) -> Self {
        Self { playlists, selected: None }
    }

    /// A playlist created from inside the dialog is appended and selected.
    pub fn with_created(&self, playlist: Playlist) -> Self {
        let selected = Some(playlist.id.clone());
        let mut playlists = self.playlists.clone();
        playlists.push(playlist);
        Self { playlists, selected }
    }

    pub fn select(&self, playlist_id: &str) -> Self {
        let selected = self
            .playlists
            .iter()
            .find(|p| p.id == playlist_id)
            .map(|p| p.id.clone());
        Self { playlists: self.playlists.clone(), selected }
    }

    pub fn selected_playlist(&self) -> Option<&Playlist> {
        let id = self.selected.as_deref()?;
        self.playlists.iter().find(|p| p.id == id)
    }
}
