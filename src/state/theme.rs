use serde::{Deserialize, Serialize};

use crate::utils::{load_json, save_json, KeyValueStore, STORAGE_KEY_THEME};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            ThemeMode::Light => "theme-light",
            ThemeMode::Dark => "theme-dark",
        }
    }

    /// Stored preference, dark when absent or unreadable.
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Self {
        load_json(store, STORAGE_KEY_THEME).ok().flatten().unwrap_or_default()
    }

    pub fn save<S: KeyValueStore + ?Sized>(self, store: &S) {
        if let Err(e) = save_json(store, STORAGE_KEY_THEME, &self) {
            log::warn!("⚠️ could not persist theme: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::MemoryStore;

    #[test]
    fn defaults_to_dark_and_persists_toggle() {
        let store = MemoryStore::new();
        assert_eq!(ThemeMode::load(&store), ThemeMode::Dark);
        ThemeMode::load(&store).toggled().save(&store);
        assert_eq!(ThemeMode::load(&store), ThemeMode::Light);
    }

    #[test]
    fn garbage_preference_falls_back_to_dark() {
        let store = MemoryStore::new();
        store.set(STORAGE_KEY_THEME, "\"sepia\"").unwrap();
        assert_eq!(ThemeMode::load(&store), ThemeMode::Dark);
    }
}
