use jiff::civil::Weekday;
use serde::{Deserialize, Serialize};

/// Short weekday labels used for exchange records and chart buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekdayLabels {
    #[default]
    Spanish,
    English,
}

// Sunday first, matching `Weekday::to_sunday_zero_offset`.
const SPANISH: [&str; 7] = ["Dom", "Lun", "Mar", "Mié", "Jue", "Vie", "Sáb"];
const ENGLISH: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

impl WeekdayLabels {
    pub fn label(self, weekday: Weekday) -> &'static str {
        let table = match self {
            WeekdayLabels::Spanish => &SPANISH,
            WeekdayLabels::English => &ENGLISH,
        };
        table[weekday.to_sunday_zero_offset() as usize]
    }
}
