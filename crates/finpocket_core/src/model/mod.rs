mod category;
mod ids;
mod input;
mod records;
mod weekday;

pub use category::{ExpenseCategory, UnknownCategory};
pub use ids::{IdGenerator, RecordId, SequentialIds, UuidGenerator};
pub use input::{ExpenseDraft, SimulationInput};
pub use records::{Dated, ExchangeDayRecord, ExpenseRecord};
pub use weekday::WeekdayLabels;
