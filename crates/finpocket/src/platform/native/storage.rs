//! Native storage implementation using the filesystem.
//!
//! Directory structure:
//! ~/.finpocket/
//!   config.yaml          # Preferences
//!   finpocket.log        # Log file
//!   cambio_records.json  # Exchange history slot
//!   gasto_records.json   # Expense slot

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::platform::storage::{Storage, StorageError};
use crate::util::io::atomic_write;

/// Native storage: one JSON file per slot inside a data directory.
pub struct NativeStorage {
    root: PathBuf,
}

impl NativeStorage {
    /// Create a new native storage with the given root path.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Get the default data directory path (~/.finpocket/)
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".finpocket")
    }

    /// Get the path of a slot file
    fn slot_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", sanitize_key(key)))
    }

    /// Create the data directory if needed
    fn init(&self) -> Result<(), StorageError> {
        fs::create_dir_all(&self.root)
            .map_err(|e| StorageError::Io(format!("Failed to create data directory: {}", e)))
    }
}

impl Storage for NativeStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.slot_path(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Io(format!("Failed to read {}: {}", key, e))),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.init()?;
        atomic_write(&self.slot_path(key), value)
            .map_err(|e| StorageError::Io(format!("Failed to write {}: {}", key, e)))
    }
}

/// Sanitize a slot key to be safe as a filename
fn sanitize_key(key: &str) -> String {
    key.chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_slot_reads_none() {
        let temp_dir = TempDir::new().unwrap();
        let storage = NativeStorage::new(temp_dir.path().join(".finpocket"));

        assert_eq!(storage.read("gasto_records").unwrap(), None);
    }

    #[test]
    fn test_write_creates_directory_and_file() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join(".finpocket");
        let storage = NativeStorage::new(root.clone());

        storage.write("cambio_records", "[]").unwrap();

        assert!(root.join("cambio_records.json").exists());
        assert_eq!(storage.read("cambio_records").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_write_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let storage = NativeStorage::new(temp_dir.path().to_path_buf());

        storage.write("slot", "first").unwrap();
        storage.write("slot", "second").unwrap();
        assert_eq!(storage.read("slot").unwrap().as_deref(), Some("second"));
        assert!(!temp_dir.path().join("slot.json.tmp").exists());
    }

    #[test]
    fn test_sanitize_key() {
        assert_eq!(sanitize_key("gasto_records"), "gasto_records");
        assert_eq!(sanitize_key("../escape"), "___escape");
        assert_eq!(sanitize_key("a:b"), "a_b");
    }
}
