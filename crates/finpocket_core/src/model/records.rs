//! Persisted record shapes
//!
//! Field names match the stored JSON: `{id, day, gain, date}` for exchange
//! days and `{id, date, amount, category, description}` for expenses.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::category::ExpenseCategory;
use super::ids::RecordId;

/// Anything with a creation timestamp that can be placed on a calendar day
pub trait Dated {
    fn timestamp(&self) -> Timestamp;
}

/// One confirmed exchange simulation, logged on the day it was confirmed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeDayRecord {
    pub id: RecordId,
    /// Short weekday label of `date`, fixed at creation
    pub day: String,
    pub gain: f64,
    pub date: Timestamp,
}

impl Dated for ExchangeDayRecord {
    fn timestamp(&self) -> Timestamp {
        self.date
    }
}

/// One logged expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    pub id: RecordId,
    pub date: Timestamp,
    pub amount: f64,
    pub category: ExpenseCategory,
    #[serde(default)]
    pub description: String,
}

impl Dated for ExpenseRecord {
    fn timestamp(&self) -> Timestamp {
        self.date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_browser_written_expense() {
        let json = r#"{
            "id": "0b7c",
            "date": "2025-06-15T18:30:00.000Z",
            "amount": 12.5,
            "category": "Salidas",
            "description": ""
        }"#;
        let record: ExpenseRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id.as_str(), "0b7c");
        assert_eq!(record.amount, 12.5);
        assert_eq!(record.category, ExpenseCategory::Outings);
        assert_eq!(
            record.date,
            "2025-06-15T18:30:00Z".parse::<Timestamp>().unwrap()
        );
    }

    #[test]
    fn test_exchange_record_field_names() {
        let record = ExchangeDayRecord {
            id: RecordId::from("a"),
            day: "Dom".to_string(),
            gain: 14.44,
            date: "2025-06-15T12:00:00Z".parse().unwrap(),
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["id"], "a");
        assert_eq!(value["day"], "Dom");
        assert_eq!(value["gain"], 14.44);
        assert_eq!(value["date"], "2025-06-15T12:00:00Z");
    }

    #[test]
    fn test_missing_description_defaults_to_empty() {
        let json = r#"{"id":"x","date":"2025-06-15T18:30:00Z","amount":3,"category":"Otros"}"#;
        let record: ExpenseRecord = serde_json::from_str(json).unwrap();
        assert!(record.description.is_empty());
    }
}
