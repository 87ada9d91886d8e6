//! In-memory state for both sections.
//!
//! The tracker owns the two collections plus the transient simulator and
//! expense form. Mutations report which collection changed so the host can
//! persist it; `None` always means nothing changed.

use crate::aggregate::{self, WEEK_DAYS, WeekdayBucket};
use crate::clock::Clock;
use crate::error::{ExpenseInputError, SimulationError};
use crate::model::{
    ExchangeDayRecord, ExpenseCategory, ExpenseDraft, ExpenseRecord, IdGenerator, RecordId,
    SimulationInput, WeekdayLabels,
};
use crate::store;

pub const DELETE_EXPENSE_PROMPT: &str = "¿Eliminar este registro?";
pub const RESET_EXCHANGE_PROMPT: &str = "¿Borrar todo el historial y simulador?";

/// The two persisted collections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Exchange,
    Expenses,
}

/// The expense entry form: a draft plus the record being edited, if any
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExpenseForm {
    pub draft: ExpenseDraft,
    pub editing: Option<RecordId>,
}

pub struct Tracker<C: Clock, G: IdGenerator> {
    clock: C,
    ids: G,
    labels: WeekdayLabels,
    exchange_records: Vec<ExchangeDayRecord>,
    expense_records: Vec<ExpenseRecord>,
    simulation: SimulationInput,
    form: ExpenseForm,
}

impl<C: Clock, G: IdGenerator> Tracker<C, G> {
    pub fn new(clock: C, ids: G) -> Self {
        Self {
            clock,
            ids,
            labels: WeekdayLabels::default(),
            exchange_records: Vec::new(),
            expense_records: Vec::new(),
            simulation: SimulationInput::default(),
            form: ExpenseForm::default(),
        }
    }

    pub fn with_labels(mut self, labels: WeekdayLabels) -> Self {
        self.labels = labels;
        self
    }

    /// Replace both collections with previously stored ones
    pub fn hydrate(&mut self, exchange: Vec<ExchangeDayRecord>, expenses: Vec<ExpenseRecord>) {
        self.exchange_records = store::cap_exchange_history(exchange);
        self.expense_records = expenses;
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn labels(&self) -> WeekdayLabels {
        self.labels
    }

    pub fn exchange_records(&self) -> &[ExchangeDayRecord] {
        &self.exchange_records
    }

    pub fn expense_records(&self) -> &[ExpenseRecord] {
        &self.expense_records
    }

    pub fn simulation(&self) -> SimulationInput {
        self.simulation
    }

    pub fn form(&self) -> &ExpenseForm {
        &self.form
    }

    pub fn find_expense(&self, id: &RecordId) -> Option<&ExpenseRecord> {
        self.expense_records.iter().find(|r| &r.id == id)
    }

    // ------------------------------------------------------------------
    // Exchange section
    // ------------------------------------------------------------------

    pub fn set_simulation_input(&mut self, input: SimulationInput) {
        self.simulation = input;
    }

    /// Manual clear of the simulator fields; history is kept
    pub fn clear_simulation(&mut self) {
        self.simulation = SimulationInput::default();
    }

    pub fn estimated_gain(&self) -> f64 {
        self.simulation.estimated_gain()
    }

    /// Log the current simulation as today's exchange record
    pub fn confirm_simulation(&mut self) -> Result<Collection, SimulationError> {
        let record =
            store::new_exchange_record(&self.simulation, &mut self.ids, &self.clock, self.labels)?;
        let current = std::mem::take(&mut self.exchange_records);
        self.exchange_records = store::add_exchange_record(current, record);
        Ok(Collection::Exchange)
    }

    /// Clear the whole exchange history and the simulator, if confirmed
    pub fn reset_exchange(&mut self, confirm: impl FnOnce(&str) -> bool) -> Option<Collection> {
        if !confirm(RESET_EXCHANGE_PROMPT) {
            return None;
        }
        let (records, input) = store::reset_exchange_state();
        self.exchange_records = records;
        self.simulation = input;
        Some(Collection::Exchange)
    }

    // ------------------------------------------------------------------
    // Expense section
    // ------------------------------------------------------------------

    pub fn set_draft_amount(&mut self, amount: impl Into<String>) {
        self.form.draft.amount = amount.into();
    }

    pub fn set_draft_category(&mut self, category: ExpenseCategory) {
        self.form.draft.category = category;
    }

    /// Load an existing record into the form for editing.
    ///
    /// Returns false, leaving the form alone, when no record has `id`.
    pub fn begin_edit(&mut self, id: &RecordId) -> bool {
        let Some(record) = self.find_expense(id) else {
            return false;
        };
        self.form = ExpenseForm {
            draft: ExpenseDraft::new(record.amount.to_string(), record.category),
            editing: Some(record.id.clone()),
        };
        true
    }

    pub fn cancel_edit(&mut self) {
        self.form = ExpenseForm::default();
    }

    /// Save the form as a new expense or as an edit of the record being
    /// edited. The form resets only when the save is accepted.
    pub fn submit_expense(&mut self) -> Result<Collection, ExpenseInputError> {
        self.expense_records = store::add_or_update_expense(
            &self.expense_records,
            &self.form.draft,
            self.form.editing.as_ref(),
            &mut self.ids,
            &self.clock,
        )?;
        self.form = ExpenseForm::default();
        Ok(Collection::Expenses)
    }

    /// Delete one expense, if confirmed and present
    pub fn delete_expense(
        &mut self,
        id: &RecordId,
        confirm: impl FnOnce(&str) -> bool,
    ) -> Option<Collection> {
        if !confirm(DELETE_EXPENSE_PROMPT) {
            return None;
        }
        let before = self.expense_records.len();
        self.expense_records = store::delete_expense(&self.expense_records, id);
        if self.expense_records.len() == before {
            return None;
        }
        if self.form.editing.as_ref() == Some(id) {
            self.form = ExpenseForm::default();
        }
        Some(Collection::Expenses)
    }

    // ------------------------------------------------------------------
    // Derived values
    // ------------------------------------------------------------------

    pub fn weekly_gain_total(&self) -> f64 {
        aggregate::weekly_gain_total(&self.exchange_records)
    }

    pub fn weekly_expense_total(&self) -> f64 {
        aggregate::weekly_expense_total(&self.expense_records, &self.clock)
    }

    pub fn gain_chart(&self) -> [WeekdayBucket; WEEK_DAYS] {
        aggregate::gain_series(&self.exchange_records, &self.clock, self.labels)
    }

    pub fn expense_chart(&self) -> [WeekdayBucket; WEEK_DAYS] {
        aggregate::expense_series(&self.expense_records, &self.clock, self.labels)
    }
}
