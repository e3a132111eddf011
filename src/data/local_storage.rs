use anyhow::{Result, anyhow};

use crate::config::PERSISTENCE;
use crate::data::store::CollectionStore;

/// Browser `window.localStorage`, keyed by the configured cache key.
pub struct LocalStorageStore {
    pub key: &'static str,
}

impl Default for LocalStorageStore {
    fn default() -> Self {
        Self {
            key: PERSISTENCE.cache.storage_key,
        }
    }
}

impl CollectionStore for LocalStorageStore {
    fn read_raw(&self) -> Result<Option<String>> {
        let window = web_sys::window().ok_or_else(|| anyhow!("no global `window` exists"))?;
        let storage = window
            .local_storage()
            .map_err(|e| anyhow!("localStorage is not accessible: {:?}", e))?;
        let Some(storage) = storage else {
            return Ok(None);
        };
        storage
            .get_item(self.key)
            .map_err(|e| anyhow!("Failed to read localStorage[{:?}]: {:?}", self.key, e))
    }

    fn signature(&self) -> &'static str {
        "Browser Local Storage"
    }
}
