//! Record store transitions.
//!
//! Each function takes the current collection and returns the next one. None
//! of them touch persistence; the host saves whatever collection changed.

use crate::clock::Clock;
use crate::error::{ExpenseInputError, SimulationError};
use crate::model::{
    ExchangeDayRecord, ExpenseDraft, ExpenseRecord, IdGenerator, RecordId, SimulationInput,
    WeekdayLabels,
};

/// Maximum number of exchange days kept; older entries are evicted first
pub const EXCHANGE_HISTORY_LIMIT: usize = 14;

/// Append `record`, then evict from the front down to the history limit
pub fn add_exchange_record(
    mut current: Vec<ExchangeDayRecord>,
    record: ExchangeDayRecord,
) -> Vec<ExchangeDayRecord> {
    current.push(record);
    cap_exchange_history(current)
}

/// Keep only the most recent [`EXCHANGE_HISTORY_LIMIT`] records
pub fn cap_exchange_history(mut records: Vec<ExchangeDayRecord>) -> Vec<ExchangeDayRecord> {
    if records.len() > EXCHANGE_HISTORY_LIMIT {
        let excess = records.len() - EXCHANGE_HISTORY_LIMIT;
        records.drain(..excess);
    }
    records
}

/// Build the exchange record a confirm action would log.
///
/// Gain and weekday label are fixed here and never recomputed.
pub fn new_exchange_record(
    input: &SimulationInput,
    ids: &mut impl IdGenerator,
    clock: &impl Clock,
    labels: WeekdayLabels,
) -> Result<ExchangeDayRecord, SimulationError> {
    let gain = input.estimated_gain();
    if gain <= 0.0 {
        return Err(SimulationError::ZeroGain);
    }

    let now = clock.now();
    Ok(ExchangeDayRecord {
        id: ids.next_id(),
        day: labels.label(clock.local_date(now).weekday()).to_string(),
        gain,
        date: now,
    })
}

/// Parse user-entered amount text. Only finite values above zero pass.
pub fn parse_amount(raw: &str) -> Result<f64, ExpenseInputError> {
    let amount: f64 = raw
        .trim()
        .parse()
        .map_err(|_| ExpenseInputError::NotANumber(raw.to_string()))?;

    if !amount.is_finite() {
        return Err(ExpenseInputError::NotANumber(raw.to_string()));
    }
    if amount <= 0.0 {
        return Err(ExpenseInputError::NonPositive(amount));
    }
    Ok(amount)
}

/// Save an expense draft.
///
/// With `editing_id` naming an existing record, only that record's amount and
/// category change and it keeps its place. Otherwise a new record is put at
/// the front. An invalid amount leaves the collection untouched.
pub fn add_or_update_expense(
    current: &[ExpenseRecord],
    draft: &ExpenseDraft,
    editing_id: Option<&RecordId>,
    ids: &mut impl IdGenerator,
    clock: &impl Clock,
) -> Result<Vec<ExpenseRecord>, ExpenseInputError> {
    let amount = parse_amount(&draft.amount)?;

    if let Some(id) = editing_id
        && current.iter().any(|r| &r.id == id)
    {
        let next = current
            .iter()
            .map(|r| {
                if &r.id == id {
                    ExpenseRecord {
                        amount,
                        category: draft.category,
                        description: String::new(),
                        ..r.clone()
                    }
                } else {
                    r.clone()
                }
            })
            .collect();
        return Ok(next);
    }

    let record = ExpenseRecord {
        id: ids.next_id(),
        date: clock.now(),
        amount,
        category: draft.category,
        description: String::new(),
    };

    let mut next = Vec::with_capacity(current.len() + 1);
    next.push(record);
    next.extend_from_slice(current);
    Ok(next)
}

/// Remove the expense with `id`; unknown ids leave the list as is
pub fn delete_expense(current: &[ExpenseRecord], id: &RecordId) -> Vec<ExpenseRecord> {
    current.iter().filter(|r| &r.id != id).cloned().collect()
}

/// Empty exchange history and a zeroed simulator
pub fn reset_exchange_state() -> (Vec<ExchangeDayRecord>, SimulationInput) {
    (Vec::new(), SimulationInput::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("12.5"), Ok(12.5));
        assert_eq!(parse_amount("  7 "), Ok(7.0));
        assert_eq!(
            parse_amount("abc"),
            Err(ExpenseInputError::NotANumber("abc".to_string()))
        );
        assert_eq!(parse_amount("-5"), Err(ExpenseInputError::NonPositive(-5.0)));
        assert_eq!(parse_amount("0"), Err(ExpenseInputError::NonPositive(0.0)));
        assert!(parse_amount("").is_err());
        assert!(parse_amount("NaN").is_err());
        assert!(parse_amount("inf").is_err());
    }
}
