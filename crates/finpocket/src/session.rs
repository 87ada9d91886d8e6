//! A tracker bound to durable storage.
//!
//! Every accepted mutation is followed, synchronously, by
//! [`Session::on_collection_changed`] for the collection it touched. Rejected
//! or declined actions change nothing and save nothing.

use finpocket_core::{
    Clock, Collection, ExpenseCategory, ExpenseInputError, IdGenerator, RecordId,
    SimulationError, SimulationInput, SystemClock, Tracker, UuidGenerator,
};

use crate::persistence::{self, EXCHANGE_KEY, EXPENSES_KEY};
use crate::platform::{Storage, StorageError};

pub struct Session<S: Storage, C: Clock = SystemClock, G: IdGenerator = UuidGenerator> {
    storage: S,
    tracker: Tracker<C, G>,
    /// Error of the most recent save, cleared by the next successful one
    save_error: Option<StorageError>,
}

impl<S: Storage> Session<S> {
    /// Open with the system clock and random ids
    pub fn open_default(storage: S) -> Self {
        Self::open(storage, Tracker::new(SystemClock::new(), UuidGenerator))
    }
}

impl<S: Storage, C: Clock, G: IdGenerator> Session<S, C, G> {
    /// Load both collections from `storage` into `tracker`
    pub fn open(storage: S, mut tracker: Tracker<C, G>) -> Self {
        let exchange = persistence::load(&storage, EXCHANGE_KEY);
        let expenses = persistence::load(&storage, EXPENSES_KEY);
        tracker.hydrate(exchange, expenses);

        tracing::info!(
            exchange = tracker.exchange_records().len(),
            expenses = tracker.expense_records().len(),
            "Session opened"
        );

        Self {
            storage,
            tracker,
            save_error: None,
        }
    }

    pub fn tracker(&self) -> &Tracker<C, G> {
        &self.tracker
    }

    pub fn save_error(&self) -> Option<&StorageError> {
        self.save_error.as_ref()
    }

    /// Persist `collection` as it is now
    pub fn on_collection_changed(&self, collection: Collection) -> Result<(), StorageError> {
        let key = persistence::slot_key(collection);
        match collection {
            Collection::Exchange => {
                persistence::save(&self.storage, key, self.tracker.exchange_records())
            }
            Collection::Expenses => {
                persistence::save(&self.storage, key, self.tracker.expense_records())
            }
        }
    }

    fn commit(&mut self, collection: Collection) {
        match self.on_collection_changed(collection) {
            Ok(()) => self.save_error = None,
            Err(e) => {
                tracing::error!(?collection, error = %e, "Failed to save collection");
                self.save_error = Some(e);
            }
        }
    }

    // ------------------------------------------------------------------
    // Exchange section
    // ------------------------------------------------------------------

    pub fn set_simulation_input(&mut self, input: SimulationInput) {
        self.tracker.set_simulation_input(input);
    }

    pub fn clear_simulation(&mut self) {
        self.tracker.clear_simulation();
    }

    pub fn confirm_simulation(&mut self) -> Result<Collection, SimulationError> {
        let changed = self.tracker.confirm_simulation().inspect_err(|e| {
            tracing::debug!(error = %e, "Simulation confirm rejected");
        })?;
        self.commit(changed);
        Ok(changed)
    }

    pub fn reset_exchange(&mut self, confirm: impl FnOnce(&str) -> bool) -> Option<Collection> {
        let changed = self.tracker.reset_exchange(confirm)?;
        tracing::info!("Exchange history reset");
        self.commit(changed);
        Some(changed)
    }

    // ------------------------------------------------------------------
    // Expense section
    // ------------------------------------------------------------------

    pub fn set_draft_amount(&mut self, amount: impl Into<String>) {
        self.tracker.set_draft_amount(amount);
    }

    pub fn set_draft_category(&mut self, category: ExpenseCategory) {
        self.tracker.set_draft_category(category);
    }

    pub fn begin_edit(&mut self, id: &RecordId) -> bool {
        self.tracker.begin_edit(id)
    }

    pub fn cancel_edit(&mut self) {
        self.tracker.cancel_edit();
    }

    pub fn submit_expense(&mut self) -> Result<Collection, ExpenseInputError> {
        let changed = self.tracker.submit_expense().inspect_err(|e| {
            tracing::debug!(error = %e, "Expense input rejected");
        })?;
        self.commit(changed);
        Ok(changed)
    }

    pub fn delete_expense(
        &mut self,
        id: &RecordId,
        confirm: impl FnOnce(&str) -> bool,
    ) -> Option<Collection> {
        let changed = self.tracker.delete_expense(id, confirm)?;
        self.commit(changed);
        Some(changed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::MemoryStorage;
    use finpocket_core::{ExchangeDayRecord, ExpenseRecord, FixedClock, SequentialIds};

    fn tracker(prefix: &str) -> Tracker<FixedClock, SequentialIds> {
        Tracker::new(
            FixedClock::utc("2025-06-15T12:00:00Z".parse().unwrap()),
            SequentialIds::new(prefix),
        )
    }

    /// Storage whose writes always fail
    struct ReadOnlyStorage;

    impl Storage for ReadOnlyStorage {
        fn read(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Ok(None)
        }

        fn write(&self, key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::NotAvailable(format!("{key} is read-only")))
        }
    }

    #[test]
    fn test_accepted_mutations_are_saved_and_reloaded() {
        let storage = MemoryStorage::new();

        {
            let mut session = Session::open(&storage, tracker("a"));
            session.set_simulation_input(SimulationInput::new(100.0, 50.0, 45.0));
            session.confirm_simulation().unwrap();
            session.set_draft_amount("20");
            session.submit_expense().unwrap();
        }

        let session = Session::open(&storage, tracker("b"));
        assert_eq!(session.tracker().exchange_records().len(), 1);
        assert_eq!(session.tracker().exchange_records()[0].gain, 14.44);
        assert_eq!(session.tracker().expense_records().len(), 1);
        assert_eq!(session.tracker().expense_records()[0].amount, 20.0);
        // Transient input is never persisted
        assert!(session.tracker().simulation().is_zeroed());
    }

    #[test]
    fn test_rejected_actions_do_not_write() {
        let storage = MemoryStorage::new();
        let mut session = Session::open(&storage, tracker("a"));

        session.set_draft_amount("-5");
        assert!(session.submit_expense().is_err());
        assert!(session.confirm_simulation().is_err());
        assert_eq!(session.delete_expense(&RecordId::from("x"), |_| true), None);

        assert_eq!(storage.read(EXPENSES_KEY).unwrap(), None);
        assert_eq!(storage.read(EXCHANGE_KEY).unwrap(), None);
    }

    #[test]
    fn test_declined_delete_keeps_stored_record() {
        let storage = MemoryStorage::new();
        let mut session = Session::open(&storage, tracker("a"));
        session.set_draft_amount("8");
        session.submit_expense().unwrap();
        let id = session.tracker().expense_records()[0].id.clone();

        assert_eq!(session.delete_expense(&id, |_| false), None);
        let stored: Vec<ExpenseRecord> = persistence::load(&storage, EXPENSES_KEY);
        assert_eq!(stored.len(), 1);

        assert_eq!(session.delete_expense(&id, |_| true), Some(Collection::Expenses));
        let stored: Vec<ExpenseRecord> = persistence::load(&storage, EXPENSES_KEY);
        assert!(stored.is_empty());
    }

    #[test]
    fn test_reset_saves_empty_history() {
        let storage = MemoryStorage::new();
        let mut session = Session::open(&storage, tracker("a"));
        session.set_simulation_input(SimulationInput::new(100.0, 50.0, 45.0));
        session.confirm_simulation().unwrap();

        session.reset_exchange(|_| true);

        let stored: Vec<ExchangeDayRecord> = persistence::load(&storage, EXCHANGE_KEY);
        assert!(stored.is_empty());
        assert_eq!(storage.read(EXCHANGE_KEY).unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_corrupt_slot_opens_empty() {
        let storage = MemoryStorage::new();
        storage.write(EXPENSES_KEY, "{oops").unwrap();

        let session = Session::open(&storage, tracker("a"));
        assert!(session.tracker().expense_records().is_empty());
    }

    #[test]
    fn test_failed_save_keeps_memory_state_and_reports() {
        let mut session = Session::open(ReadOnlyStorage, tracker("a"));
        session.set_draft_amount("5");

        assert_eq!(session.submit_expense(), Ok(Collection::Expenses));
        assert_eq!(session.tracker().expense_records().len(), 1);
        assert!(matches!(
            session.save_error(),
            Some(StorageError::NotAvailable(_))
        ));
    }
}
