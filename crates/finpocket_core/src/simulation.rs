//! Exchange gain simulation

use crate::model::SimulationInput;

/// Cash multiplier applied before conversion (a flat 3% transaction fee)
pub const TRANSACTION_FEE_FACTOR: f64 = 1.03;

/// Simulated gain of exchanging `cash` at `buy_rate` and converting back at
/// `sell_rate`.
///
/// Returns 0 when any input is non-positive or not finite. Otherwise the gain
/// is floored at 0 and rounded to cents.
pub fn simulate_gain(cash: f64, buy_rate: f64, sell_rate: f64) -> f64 {
    let inputs = [cash, buy_rate, sell_rate];
    if inputs.iter().any(|v| !v.is_finite() || *v <= 0.0) {
        return 0.0;
    }

    let adjusted_cash = cash * TRANSACTION_FEE_FACTOR;
    let final_result = adjusted_cash * (buy_rate / sell_rate);
    let raw_gain = round_cents(final_result - cash);

    if raw_gain.is_finite() {
        raw_gain.max(0.0)
    } else {
        0.0
    }
}

/// Round to 2 decimal places
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

impl SimulationInput {
    /// Gain preview for the current input
    pub fn estimated_gain(&self) -> f64 {
        simulate_gain(self.cash, self.buy_rate, self.sell_rate)
    }
}
