// ============================================================================
// STORAGE PORT - durable key/value persistence
// ============================================================================
// localStorage in the browser, an in-memory map in tests (and as fallback
// when the browser refuses storage access).
// ============================================================================

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use gloo_storage::{LocalStorage, Storage};
use serde::{de::DeserializeOwned, Serialize};

use crate::error::AppError;

/// Raw string storage, keyed by name.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError>;
    fn set(&self, key: &str, value: &str) -> Result<(), AppError>;
    fn remove(&self, key: &str) -> Result<(), AppError>;
}

/// Browser `localStorage`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LocalStore;

impl LocalStore {
    fn storage() -> Result<web_sys::Storage, AppError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or_else(|| AppError::Storage("localStorage is not accessible".into()))
    }

    /// True when the browser grants localStorage access.
    pub fn is_available() -> bool {
        Self::storage().is_ok()
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        Self::storage()?
            .get_item(key)
            .map_err(|_| AppError::Storage(format!("could not read '{}'", key)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        Self::storage()?;
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|_| AppError::Storage(format!("could not write '{}'", key)))
    }

    fn remove(&self, key: &str) -> Result<(), AppError> {
        Self::storage()?;
        LocalStorage::delete(key);
        Ok(())
    }
}

/// In-memory store. Clones share the same map.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), AppError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Rc<S> {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), AppError> {
        (**self).remove(key)
    }
}

pub fn save_json<S, T>(store: &S, key: &str, value: &T) -> Result<(), AppError>
where
    S: KeyValueStore + ?Sized,
    T: Serialize,
{
    let json = serde_json::to_string(value)?;
    store.set(key, &json)
}

/// `Ok(None)` when the key is absent; `Err(Parse)` when the stored value is malformed.
pub fn load_json<S, T>(store: &S, key: &str) -> Result<Option<T>, AppError>
where
    S: KeyValueStore + ?Sized,
    T: DeserializeOwned,
{
    match store.get(key)? {
        Some(json) => serde_json::from_str(&json).map(Some).map_err(Into::into),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_clones_share_entries() {
        let a = MemoryStore::new();
        let b = a.clone();
        a.set("k", "v").unwrap();
        assert_eq!(b.get("k").unwrap().as_deref(), Some("v"));
        b.remove("k").unwrap();
        assert!(a.is_empty());
    }

    #[test]
    fn json_helpers_round_trip_and_flag_garbage() {
        let store = MemoryStore::new();
        save_json(&store, "nums", &vec![1, 2, 3]).unwrap();
        let nums: Option<Vec<i32>> = load_json(&store, "nums").unwrap();
        assert_eq!(nums, Some(vec![1, 2, 3]));

        store.set("nums", "{not json").unwrap();
        let err = load_json::<_, Vec<i32>>(&store, "nums").unwrap_err();
        assert!(matches!(err, AppError::Parse(_)));

        let missing: Option<Vec<i32>> = load_json(&store, "absent").unwrap();
        assert!(missing.is_none());
    }
}
