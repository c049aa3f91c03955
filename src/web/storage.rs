//! Session-scoped [`IndexStore`].

use snapsite_input::{IndexStore, StoreError};
use web_sys::Storage;

pub struct SessionStore {
    storage: Option<Storage>,
}

impl SessionStore {
    /// Open `sessionStorage`; private modes may deny it.
    pub fn open() -> Self {
        let storage = web_sys::window().and_then(|w| w.session_storage().ok().flatten());
        if storage.is_none() {
            tracing::debug!("sessionStorage unavailable; carousel index will not persist");
        }
        Self { storage }
    }

    fn storage(&self) -> Result<&Storage, StoreError> {
        self.storage.as_ref().ok_or(StoreError::Unavailable)
    }
}

impl IndexStore for SessionStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage()?
            .get_item(key)
            .map_err(|err| StoreError::Backend(format!("{err:?}")))
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|err| StoreError::Backend(format!("{err:?}")))
    }
}
