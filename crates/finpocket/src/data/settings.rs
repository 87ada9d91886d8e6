//! User preferences stored in `{data_dir}/config.yaml`.
//!
//! ```yaml
//! weekday_labels: spanish   # or: english
//! currency_symbol: "$"
//! ```

use std::path::{Path, PathBuf};

use finpocket_core::WeekdayLabels;
use serde::{Deserialize, Serialize};

use crate::platform::StorageError;
use crate::util::io::atomic_write;

const SETTINGS_FILE: &str = "config.yaml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Language of the weekday labels on records and charts
    pub weekday_labels: WeekdayLabels,
    pub currency_symbol: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            weekday_labels: WeekdayLabels::Spanish,
            currency_symbol: "$".into(),
        }
    }
}

impl Settings {
    pub fn path(data_dir: &Path) -> PathBuf {
        data_dir.join(SETTINGS_FILE)
    }

    /// Load settings from file, or return defaults if missing or malformed.
    pub fn load_or_default(data_dir: &Path) -> Self {
        let path = Self::path(data_dir);
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => serde_saphyr::from_str(&content).unwrap_or_else(|e| {
                tracing::warn!(path = %path.display(), error = %e, "Invalid settings, using defaults");
                Self::default()
            }),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to read settings");
                Self::default()
            }
        }
    }

    /// Save settings to file.
    pub fn save(&self, data_dir: &Path) -> Result<(), StorageError> {
        let yaml = serde_saphyr::to_string(self).map_err(|e| {
            StorageError::Serialize(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::create_dir_all(data_dir)
            .map_err(|e| StorageError::Io(format!("Failed to create data directory: {}", e)))?;
        atomic_write(&Self::path(data_dir), &yaml)
            .map_err(|e| StorageError::Io(format!("Failed to write settings: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        assert_eq!(Settings::load_or_default(temp_dir.path()), Settings::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(Settings::path(temp_dir.path()), "weekday_labels: english\n").unwrap();

        let settings = Settings::load_or_default(temp_dir.path());
        assert_eq!(settings.weekday_labels, WeekdayLabels::English);
        assert_eq!(settings.currency_symbol, "$");
    }

    #[test]
    fn test_malformed_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(Settings::path(temp_dir.path()), "weekday_labels: klingon\n").unwrap();

        assert_eq!(Settings::load_or_default(temp_dir.path()), Settings::default());
    }

    #[test]
    fn test_save_and_reload() {
        let temp_dir = TempDir::new().unwrap();
        let data_dir = temp_dir.path().join(".finpocket");
        let settings = Settings {
            weekday_labels: WeekdayLabels::English,
            currency_symbol: "€".into(),
        };

        settings.save(&data_dir).unwrap();
        assert_eq!(Settings::load_or_default(&data_dir), settings);
    }
}
