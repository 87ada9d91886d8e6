//! Web entry point.
//!
//! The browser page owns rendering; this module hands it a session backed
//! by LocalStorage and exposes the tracker through a small JS-facing API.

use finpocket_core::{ExpenseCategory, RecordId, SimulationInput};
use wasm_bindgen::prelude::*;

use crate::platform::web::WebStorage;
use crate::session::Session;

/// Open a session over the page's LocalStorage
pub fn open_web_session() -> Session<WebStorage> {
    Session::open_default(WebStorage::new())
}

/// Tracker handle exported to JavaScript.
#[wasm_bindgen]
pub struct WebTracker {
    session: Session<WebStorage>,
}

#[wasm_bindgen]
impl WebTracker {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WebTracker {
        WebTracker {
            session: open_web_session(),
        }
    }

    /// Preview the gain for the given inputs
    pub fn estimate(&mut self, cash: f64, buy_rate: f64, sell_rate: f64) -> f64 {
        self.session
            .set_simulation_input(SimulationInput::new(cash, buy_rate, sell_rate));
        self.session.tracker().estimated_gain()
    }

    /// Log the current simulation for today. Returns false on a zero gain.
    pub fn confirm_simulation(&mut self) -> bool {
        self.session.confirm_simulation().is_ok()
    }

    pub fn reset_exchange(&mut self) -> bool {
        self.session
            .reset_exchange(|prompt| confirm_in_browser(prompt))
            .is_some()
    }

    /// Submit an expense; `editing_id` updates that record when it exists.
    pub fn submit_expense(
        &mut self,
        amount: String,
        category: &str,
        editing_id: Option<String>,
    ) -> Result<(), JsValue> {
        let category: ExpenseCategory = category
            .parse()
            .map_err(|e: finpocket_core::UnknownCategory| JsValue::from_str(&e.to_string()))?;

        self.session.cancel_edit();
        if let Some(id) = editing_id {
            self.session.begin_edit(&RecordId::from(id));
        }
        self.session.set_draft_amount(amount);
        self.session.set_draft_category(category);
        self.session
            .submit_expense()
            .map(|_| ())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn delete_expense(&mut self, id: String) -> bool {
        self.session
            .delete_expense(&RecordId::from(id), |prompt| confirm_in_browser(prompt))
            .is_some()
    }

    pub fn weekly_gain_total(&self) -> f64 {
        self.session.tracker().weekly_gain_total()
    }

    pub fn weekly_expense_total(&self) -> f64 {
        self.session.tracker().weekly_expense_total()
    }

    /// Both collections and charts as one JSON document
    pub fn snapshot(&self) -> Result<String, JsValue> {
        let tracker = self.session.tracker();
        let snapshot = serde_json::json!({
            "exchange": tracker.exchange_records(),
            "expenses": tracker.expense_records(),
            "gain_chart": tracker.gain_chart(),
            "expense_chart": tracker.expense_chart(),
        });
        serde_json::to_string(&snapshot).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

impl Default for WebTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = window, js_name = confirm)]
    fn confirm_in_browser(message: &str) -> bool;
}

/// WASM entry point.
#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Set up panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging to browser console
    crate::init_logging_web();

    tracing::info!("finpocket web version starting");
    Ok(())
}
