use super::KeyValueStore;
use crate::error::StoreError;

/// Browser LocalStorage, values stored as decimal strings under a prefix
#[derive(Debug, Clone)]
pub struct LocalStorageStore {
    prefix: String,
}

impl LocalStorageStore {
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
        }
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
    }

    fn full_key(&self, key: &str) -> String {
        format!("{}_{}", self.prefix, key)
    }
}

impl KeyValueStore for LocalStorageStore {
    fn get_f32(&self, key: &str) -> Option<f32> {
        let storage = Self::storage()?;
        let raw = storage.get_item(&self.full_key(key)).ok().flatten()?;
        raw.parse().ok()
    }

    fn set_f32(&mut self, key: &str, value: f32) -> Result<(), StoreError> {
        let storage = Self::storage()
            .ok_or_else(|| StoreError::Unavailable("LocalStorage not available".to_string()))?;
        storage
            .set_item(&self.full_key(key), &value.to_string())
            .map_err(|e| StoreError::Unavailable(format!("{:?}", e)))
    }
}
