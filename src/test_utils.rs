//! Shared constructors for unit tests.

use crate::navigator::YearMonth;
use crate::{BirthdayRecord, DayOfMonth, Month, RecordId};
use chrono::NaiveDate;

/// Builds a date from one-based month and day numbers, as chrono counts them
pub(crate) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("failed to construct test date")
}

/// Builds a month from its zero-based index
pub(crate) fn month(index: u8) -> Month {
    Month::new(index).expect("failed to construct test month")
}

/// Builds a day for the given zero-based month index
pub(crate) fn day_of_month(index: u8, day: u8) -> DayOfMonth {
    DayOfMonth::new(day, month(index)).expect("failed to construct test day")
}

/// Builds a calendar page from a zero-based month index
pub(crate) fn year_month(year: i32, index: u8) -> YearMonth {
    YearMonth::new(year, month(index))
}

/// Builds a record from raw parts; the month index is zero-based
pub(crate) fn record(id: u64, name: &str, month_index: u8, day: u8) -> BirthdayRecord {
    let id = RecordId::new(id).expect("failed to construct test id");
    BirthdayRecord::new(id, name, month(month_index), day)
        .expect("failed to construct test record")
}
