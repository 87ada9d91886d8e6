//! Web storage implementation using browser LocalStorage.

use gloo_storage::{LocalStorage, Storage as GlooStorage};

use crate::platform::storage::{Storage, StorageError};

/// Web storage implementation using browser LocalStorage.
///
/// Each slot is one LocalStorage item holding the raw JSON text, so the
/// stored collections are plain arrays readable from the page itself.
#[derive(Debug, Default)]
pub struct WebStorage;

impl WebStorage {
    /// Create a new web storage instance.
    pub fn new() -> Self {
        Self
    }
}

impl Storage for WebStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        LocalStorage::raw()
            .get_item(key)
            .map_err(|e| StorageError::NotAvailable(format!("Failed to read {}: {:?}", key, e)))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|e| StorageError::Io(format!("Failed to write {}: {:?}", key, e)))
    }
}
