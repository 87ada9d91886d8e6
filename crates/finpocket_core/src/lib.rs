//! Personal finance tracking core
//!
//! This crate holds the logic behind the two sections of the tracker:
//! - Exchange: simulate the gain of a currency exchange round trip and log
//!   confirmed results per day (last 14 kept)
//! - Expenses: categorized expense entries with add, edit and delete
//!
//! plus the derived values shown for both: weekly totals and a 7-day series
//! bucketed by calendar day. Nothing here performs I/O; persistence belongs to
//! the host, which learns what to save from the [`Collection`] each mutation
//! reports.
//!
//! ```ignore
//! use finpocket_core::{FixedClock, SequentialIds, SimulationInput, Tracker};
//!
//! let mut tracker = Tracker::new(FixedClock::utc(now), SequentialIds::new("id"));
//! tracker.set_simulation_input(SimulationInput::new(100.0, 50.0, 45.0));
//! assert_eq!(tracker.estimated_gain(), 14.44);
//! tracker.confirm_simulation()?;
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod aggregate;
pub mod clock;
pub mod error;
pub mod simulation;
pub mod store;
pub mod tracker;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use aggregate::{WEEK_DAYS, WeekdayBucket};
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{ExpenseInputError, SimulationError};
pub use model::{
    Dated, ExchangeDayRecord, ExpenseCategory, ExpenseDraft, ExpenseRecord, IdGenerator,
    RecordId, SequentialIds, SimulationInput, UnknownCategory, UuidGenerator,
    WeekdayLabels,
};
pub use simulation::simulate_gain;
pub use store::EXCHANGE_HISTORY_LIMIT;
pub use tracker::{Collection, ExpenseForm, Tracker};
