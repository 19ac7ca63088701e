use serde::{Deserialize, Serialize};

/// Storage backend type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageType {
    /// localStorage - persists across browser sessions
    Local,
    /// sessionStorage - cleared when the tab closes; holds the session tokens
    Session,
    /// No-op mode - for when storage is disabled or unavailable
    None,
}

/// Thin wrapper over the browser's Web Storage, with a no-op mode for native builds.
pub struct BrowserStorage {
    storage_type: StorageType,
}

impl BrowserStorage {
    pub fn new(storage_type: StorageType) -> Self {
        Self { storage_type }
    }

    #[cfg(feature = "web")]
    fn backend(&self) -> Result<Option<web_sys::Storage>, String> {
        if self.storage_type == StorageType::None {
            return Ok(None);
        }
        let window = web_sys::window().ok_or_else(|| "Window not available".to_string())?;
        let storage = match self.storage_type {
            StorageType::Local => window.local_storage(),
            StorageType::Session => window.session_storage(),
            StorageType::None => return Ok(None),
        };
        storage.map_err(|e| format!("{:?}", e))
    }

    /// Get a value from storage by key
    pub fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "web")]
        {
            let storage = self.backend().ok()??;
            match storage.get_item(key) {
                Ok(value) => value,
                Err(e) => {
                    tracing::warn!(key, error = ?e, "failed to read from browser storage");
                    None
                }
            }
        }
        #[cfg(not(feature = "web"))]
        {
            let _ = key;
            None
        }
    }

    /// Set a value in storage
    pub fn set(&self, key: &str, value: &str) -> Result<(), String> {
        #[cfg(feature = "web")]
        {
            let Some(storage) = self.backend()? else {
                return Ok(());
            };
            storage.set_item(key, value).map_err(|e| {
                let err_msg = format!("Failed to set item in storage '{}': {:?}", key, e);
                tracing::warn!("{}", err_msg);
                err_msg
            })
        }
        #[cfg(not(feature = "web"))]
        {
            let _ = (key, value);
            Ok(())
        }
    }

    /// Remove a value from storage
    pub fn remove(&self, key: &str) -> Result<(), String> {
        #[cfg(feature = "web")]
        {
            let Some(storage) = self.backend()? else {
                return Ok(());
            };
            storage
                .remove_item(key)
                .map_err(|e| format!("Failed to remove item from storage '{}': {:?}", key, e))
        }
        #[cfg(not(feature = "web"))]
        {
            let _ = key;
            Ok(())
        }
    }

    /// Remove a value on a cleanup path, logging a failure instead of returning it.
    pub fn discard(&self, key: &str) {
        if let Err(err) = self.remove(key) {
            tracing::warn!(key, error = %err, "could not clear browser storage entry");
        }
    }

    /// Get and deserialize a JSON value from storage
    pub fn get_json<T: for<'de> Deserialize<'de>>(&self, key: &str) -> Option<T> {
        let value = self.get(key)?;
        match serde_json::from_str(&value) {
            Ok(v) => Some(v),
            Err(e) => {
                tracing::warn!(key, error = %e, "discarding unreadable JSON from browser storage");
                None
            }
        }
    }

    /// Serialize and set a JSON value in storage
    pub fn set_json<T: Serialize>(&self, key: &str, value: &T) -> Result<(), String> {
        let json = serde_json::to_string(value).map_err(|e| format!("Failed to serialize to JSON: {}", e))?;
        self.set(key, &json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_storage_is_inert() {
        let storage = BrowserStorage::new(StorageType::None);
        assert_eq!(storage.set("key", "value"), Ok(()));
        assert_eq!(storage.get("key"), None);
        assert_eq!(storage.remove("key"), Ok(()));
        storage.discard("key");
        assert_eq!(storage.get_json::<Vec<u8>>("key"), None);
    }
}
