//! `window.localStorage` as an [`inbox::KeyValueStore`].
//!
//! SYSTEM CONTEXT
//! ==============
//! The contact desk and the theme toggle both persist through this type, so
//! storage quirks (disabled storage, quota errors) are handled in one place.
//! Outside the browser build the store is permanently unavailable.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use inbox::{KeyValueStore, StoreError};

#[derive(Clone, Debug, Default)]
pub struct LocalStorage {
    #[cfg(feature = "hydrate")]
    storage: Option<web_sys::Storage>,
}

impl LocalStorage {
    /// Handle to the origin's local storage. When the browser denies access
    /// the handle still works: reads are empty and writes fail.
    #[must_use]
    pub fn open() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
            if storage.is_none() {
                log::warn!("localStorage is unavailable; nothing will persist");
            }
            Self { storage }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self {}
        }
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            self.storage.as_ref()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = self.storage.as_ref().ok_or(StoreError::Unavailable)?;
            storage.set_item(key, value).map_err(|e| StoreError::Write {
                key: key.to_owned(),
                reason: super::dom::js_error_text(&e),
            })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StoreError::Unavailable)
        }
    }
}
