//! Typed load/save of the two record collections.
//!
//! Loading never fails: a missing slot, a storage error or unparseable
//! content all produce an empty collection. Saving reports errors so the
//! caller can log them, but in-memory state is never rolled back.

use finpocket_core::Collection;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::platform::{Storage, StorageError};

/// Storage slot holding the exchange history
pub const EXCHANGE_KEY: &str = "cambio_records";
/// Storage slot holding the expense list
pub const EXPENSES_KEY: &str = "gasto_records";

pub fn slot_key(collection: Collection) -> &'static str {
    match collection {
        Collection::Exchange => EXCHANGE_KEY,
        Collection::Expenses => EXPENSES_KEY,
    }
}

/// Load a collection from its slot, degrading to empty on any failure
pub fn load<T: DeserializeOwned>(storage: &impl Storage, key: &str) -> Vec<T> {
    let content = match storage.read(key) {
        Ok(Some(content)) => content,
        Ok(None) => {
            tracing::debug!(slot = key, "Slot is empty");
            return Vec::new();
        }
        Err(e) => {
            tracing::warn!(slot = key, error = %e, "Failed to read slot, starting empty");
            return Vec::new();
        }
    };

    match serde_json::from_str(&content) {
        Ok(records) => records,
        Err(e) => {
            let e = StorageError::Parse(e.to_string());
            tracing::warn!(slot = key, error = %e, "Discarding malformed slot content");
            Vec::new()
        }
    }
}

/// Serialize a collection and write it to its slot
pub fn save<T: Serialize>(
    storage: &impl Storage,
    key: &str,
    records: &[T],
) -> Result<(), StorageError> {
    let json = serde_json::to_string(records)
        .map_err(|e| StorageError::Serialize(format!("Failed to serialize {}: {}", key, e)))?;
    storage.write(key, &json)?;
    tracing::debug!(slot = key, count = records.len(), "Saved collection");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::MemoryStorage;
    use finpocket_core::{ExpenseCategory, ExpenseRecord, ExchangeDayRecord, RecordId};

    fn sample_expenses() -> Vec<ExpenseRecord> {
        vec![
            ExpenseRecord {
                id: RecordId::from("b"),
                date: "2025-06-15T09:00:00Z".parse().unwrap(),
                amount: 12.5,
                category: ExpenseCategory::Education,
                description: String::new(),
            },
            ExpenseRecord {
                id: RecordId::from("a"),
                date: "2025-06-14T21:10:05.250Z".parse().unwrap(),
                amount: 3.0,
                category: ExpenseCategory::Food,
                description: String::new(),
            },
        ]
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let storage = MemoryStorage::new();
        let records = sample_expenses();

        save(&storage, EXPENSES_KEY, &records).unwrap();
        let loaded: Vec<ExpenseRecord> = load(&storage, EXPENSES_KEY);

        assert_eq!(loaded, records);
    }

    #[test]
    fn test_never_written_slot_loads_empty() {
        let storage = MemoryStorage::new();
        let loaded: Vec<ExchangeDayRecord> = load(&storage, EXCHANGE_KEY);
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_malformed_content_loads_empty() {
        let storage = MemoryStorage::new();
        for garbage in ["not json", "{\"id\": 1}", "[{\"id\": \"x\"}]", ""] {
            storage.write(EXCHANGE_KEY, garbage).unwrap();
            let loaded: Vec<ExchangeDayRecord> = load(&storage, EXCHANGE_KEY);
            assert!(loaded.is_empty(), "'{garbage}' should load as empty");
        }
    }

    #[test]
    fn test_slots_are_independent() {
        let storage = MemoryStorage::new();
        save(&storage, EXPENSES_KEY, &sample_expenses()).unwrap();

        let exchange: Vec<ExchangeDayRecord> = load(&storage, EXCHANGE_KEY);
        assert!(exchange.is_empty());
        assert_eq!(slot_key(Collection::Expenses), EXPENSES_KEY);
        assert_eq!(slot_key(Collection::Exchange), EXCHANGE_KEY);
    }

    #[test]
    fn test_saved_json_is_a_plain_array() {
        let storage = MemoryStorage::new();
        save(&storage, EXPENSES_KEY, &sample_expenses()).unwrap();

        let raw = storage.read(EXPENSES_KEY).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert!(value.is_array());
        assert_eq!(value[0]["category"], "Educación");
        assert_eq!(value[0]["description"], "");
    }
}
