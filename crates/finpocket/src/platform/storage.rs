//! Storage abstraction for platform-independent persistence.
//!
//! This module defines the [`Storage`] trait: a flat set of named text slots,
//! backed by files on native and by LocalStorage in the browser. Typed
//! loading and saving of collections lives in [`crate::persistence`].

use std::cell::RefCell;
use std::collections::HashMap;

/// Error types for storage operations
#[derive(Debug)]
pub enum StorageError {
    /// I/O error (file not found, permission denied, etc.)
    Io(String),
    /// Parse error (invalid JSON, corrupted data)
    Parse(String),
    /// Serialization error
    Serialize(String),
    /// Storage not available (e.g., LocalStorage disabled or full)
    NotAvailable(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Io(msg) => write!(f, "IO error: {}", msg),
            StorageError::Parse(msg) => write!(f, "Parse error: {}", msg),
            StorageError::Serialize(msg) => write!(f, "Serialization error: {}", msg),
            StorageError::NotAvailable(msg) => write!(f, "Storage not available: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

/// Platform-independent key-value storage.
///
/// Slots hold text. A slot that was never written reads as `Ok(None)`.
pub trait Storage {
    /// Read the content of a slot
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the content of a slot
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-process storage. Nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slots: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.slots.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<S: Storage + ?Sized> Storage for &S {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).write(key, value)
    }
}
