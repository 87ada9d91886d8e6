//! Weekly totals and the 7-day chart series.
//!
//! There are two weekly totals and they are deliberately different:
//! - exchange gains sum the last 7 records by insertion order
//!   ([`weekly_gain_total`]),
//! - expenses sum every record dated within the last 7 calendar days
//!   ([`weekly_expense_total`]).

use jiff::{Span, ToSpan};
use jiff::civil::Date;
use serde::Serialize;

use crate::clock::Clock;
use crate::model::{Dated, ExchangeDayRecord, ExpenseRecord, WeekdayLabels};

/// Days covered by the weekly totals and the chart series
pub const WEEK_DAYS: usize = 7;

/// One day of the chart series
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeekdayBucket {
    pub label: &'static str,
    pub date: Date,
    pub value: f64,
}

/// Sum `field` over records whose local calendar date lies within the last
/// `window_days` days, today included.
pub fn windowed_total<R: Dated>(
    records: &[R],
    field: impl Fn(&R) -> f64,
    window_days: usize,
    clock: &impl Clock,
) -> f64 {
    if window_days == 0 {
        return 0.0;
    }
    let today = clock.today();
    let first_day = window_start(today, window_days - 1);

    records
        .iter()
        .filter(|r| {
            let day = clock.local_date(r.timestamp());
            first_day <= day && day <= today
        })
        .map(field)
        .sum()
}

/// The day `days_back` days before `today`. Windows reaching past the
/// supported calendar start at [`Date::MIN`].
fn window_start(today: Date, days_back: usize) -> Date {
    i64::try_from(days_back)
        .ok()
        .and_then(|n| Span::new().try_days(n).ok())
        .and_then(|span| today.checked_sub(span).ok())
        .unwrap_or(Date::MIN)
}

/// Sum `field` over the last `count` records by insertion order
pub fn trailing_total<R>(records: &[R], field: impl Fn(&R) -> f64, count: usize) -> f64 {
    let start = records.len().saturating_sub(count);
    records[start..].iter().map(field).sum()
}

/// Build the 7-day series ending today, oldest day first.
///
/// Records outside the window are ignored.
pub fn bucket_by_weekday<R: Dated>(
    records: &[R],
    field: impl Fn(&R) -> f64,
    clock: &impl Clock,
    labels: WeekdayLabels,
) -> [WeekdayBucket; WEEK_DAYS] {
    let today = clock.today();
    let mut buckets: [WeekdayBucket; WEEK_DAYS] = std::array::from_fn(|i| {
        let date = today.saturating_sub(((WEEK_DAYS - 1 - i) as i64).days());
        WeekdayBucket {
            label: labels.label(date.weekday()),
            date,
            value: 0.0,
        }
    });

    for record in records {
        let day = clock.local_date(record.timestamp());
        if let Some(bucket) = buckets.iter_mut().find(|b| b.date == day) {
            bucket.value += field(record);
        }
    }

    buckets
}

/// Gain of the last 7 logged exchange days
pub fn weekly_gain_total(records: &[ExchangeDayRecord]) -> f64 {
    trailing_total(records, |r| r.gain, WEEK_DAYS)
}

/// Expenses dated within the last 7 calendar days
pub fn weekly_expense_total(records: &[ExpenseRecord], clock: &impl Clock) -> f64 {
    windowed_total(records, |r| r.amount, WEEK_DAYS, clock)
}

pub fn gain_series(
    records: &[ExchangeDayRecord],
    clock: &impl Clock,
    labels: WeekdayLabels,
) -> [WeekdayBucket; WEEK_DAYS] {
    bucket_by_weekday(records, |r| r.gain, clock, labels)
}

pub fn expense_series(
    records: &[ExpenseRecord],
    clock: &impl Clock,
    labels: WeekdayLabels,
) -> [WeekdayBucket; WEEK_DAYS] {
    bucket_by_weekday(records, |r| r.amount, clock, labels)
}
