//! Transient user input. Never persisted.

use super::category::ExpenseCategory;

/// The three numbers a gain preview is computed from
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SimulationInput {
    /// Cash amount to exchange
    pub cash: f64,
    pub buy_rate: f64,
    pub sell_rate: f64,
}

impl SimulationInput {
    pub fn new(cash: f64, buy_rate: f64, sell_rate: f64) -> Self {
        Self {
            cash,
            buy_rate,
            sell_rate,
        }
    }

    pub fn is_zeroed(&self) -> bool {
        *self == Self::default()
    }
}

/// Raw expense entry as typed by the user.
///
/// The amount stays text until it is submitted; parsing and validation happen
/// in the store.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExpenseDraft {
    pub amount: String,
    pub category: ExpenseCategory,
}

impl ExpenseDraft {
    pub fn new(amount: impl Into<String>, category: ExpenseCategory) -> Self {
        Self {
            amount: amount.into(),
            category,
        }
    }
}
