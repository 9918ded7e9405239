use crate::types::{DayOfMonth, Month, days_in_month};
use chrono::{Datelike, NaiveDate};

/// Places a year-less anniversary in a concrete year.
///
/// A February 29 anniversary lands on February 28 in non-leap years; every
/// other (month, day) pair exists in every year and maps unchanged.
pub fn occurrence_in_year(month: Month, day: DayOfMonth, year: i32) -> NaiveDate {
    let day = day.get().min(days_in_month(year, month));
    NaiveDate::from_ymd_opt(year, month.number(), u32::from(day))
        .expect("day clamped to month length is a valid calendar date")
}

/// The next date the anniversary falls on, counting today itself.
///
/// This year's occurrence wins while it is still ahead of (or equal to)
/// today; once it has passed, the anniversary rolls over to next year.
pub fn next_occurrence(month: Month, day: DayOfMonth, today: NaiveDate) -> NaiveDate {
    let this_year = occurrence_in_year(month, day, today.year());
    if this_year >= today {
        this_year
    } else {
        occurrence_in_year(month, day, today.year() + 1)
    }
}

/// Whole days from today until the next occurrence; 0 on the anniversary itself
pub fn days_until(month: Month, day: DayOfMonth, today: NaiveDate) -> u32 {
    let next = next_occurrence(month, day, today);
    let days = next.signed_duration_since(today).num_days();
    debug_assert!(days >= 0, "next occurrence never precedes today");
    days as u32
}
