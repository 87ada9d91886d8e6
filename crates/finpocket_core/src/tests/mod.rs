//! Behaviour tests for the tracker core
//!
//! Tests are organized by topic:
//! - `simulation` - Gain formula and its guards
//! - `store` - Collection transitions (cap, add/update, delete, reset)
//! - `aggregate` - Weekly totals and weekday buckets
//! - `tracker` - State container flows, confirmations and the form


use jiff::Timestamp;

use crate::model::{ExchangeDayRecord, ExpenseCategory, ExpenseRecord, RecordId};

/// Parse an RFC 3339 instant
pub(crate) fn ts(s: &str) -> Timestamp {
    s.parse().unwrap()
}

pub(crate) fn expense(id: &str, date: &str, amount: f64) -> ExpenseRecord {
    ExpenseRecord {
        id: RecordId::from(id),
        date: ts(date),
        amount,
        category: ExpenseCategory::Food,
        description: String::new(),
    }
}

pub(crate) fn exchange(id: &str, date: &str, gain: f64) -> ExchangeDayRecord {
    ExchangeDayRecord {
        id: RecordId::from(id),
        day: "Dom".to_string(),
        gain,
        date: ts(date),
    }
}
