use std::fmt;

/// Errors rejecting an expense amount before any record is touched
#[derive(Debug, Clone, PartialEq)]
pub enum ExpenseInputError {
    /// The amount text is not a finite number
    NotANumber(String),
    /// The amount parsed but is zero or negative
    NonPositive(f64),
}

impl fmt::Display for ExpenseInputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpenseInputError::NotANumber(raw) => write!(f, "'{raw}' is not a valid amount"),
            ExpenseInputError::NonPositive(amount) => {
                write!(f, "amount must be greater than zero (got {amount})")
            }
        }
    }
}

impl std::error::Error for ExpenseInputError {}

/// Errors rejecting a simulation confirm
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// The simulated gain is zero, so there is nothing to log
    ZeroGain,
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::ZeroGain => write!(f, "simulated gain is zero"),
        }
    }
}

impl std::error::Error for SimulationError {}
