use crate::consts::DAYS_PER_WEEK;
use crate::types::{Month, days_in_month};
use crate::BirthdayRecord;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::iter;

/// One day cell in a month grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarCell {
    pub day_of_month: u8,
    pub is_today: bool,
    pub birthdays: Vec<BirthdayRecord>,
}

/// A render-ready month: the number of blank slots before day 1 in a
/// Sunday-first week, then one cell per day of the month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthGrid {
    pub year: i32,
    pub month: Month,
    pub leading_blanks: u8,
    pub cells: Vec<CalendarCell>,
}

impl MonthGrid {
    /// Builds the grid for one month of one year.
    ///
    /// Cell birthdays keep the order records arrive in, matched purely on
    /// (month, day); `is_today` is set on at most one cell, and only when
    /// the grid shows today's month of today's year.
    pub fn build(year: i32, month: Month, records: &[BirthdayRecord], today: NaiveDate) -> Self {
        let first = NaiveDate::from_ymd_opt(year, month.number(), 1)
            .expect("first of a validated month is a valid calendar date");
        let leading_blanks = first.weekday().num_days_from_sunday() as u8;

        let cells = (1..=days_in_month(year, month))
            .map(|day| CalendarCell {
                day_of_month: day,
                is_today: today.year() == year
                    && today.month0() == u32::from(month.index0())
                    && today.day() == u32::from(day),
                birthdays: records
                    .iter()
                    .filter(|record| record.falls_on(month, day))
                    .cloned()
                    .collect(),
            })
            .collect();

        Self {
            year,
            month,
            leading_blanks,
            cells,
        }
    }

    /// Sunday-first rows of seven slots; `None` pads both edges of the month
    pub fn weeks(&self) -> Vec<Vec<Option<&CalendarCell>>> {
        let mut slots: Vec<Option<&CalendarCell>> =
            iter::repeat_n(None, usize::from(self.leading_blanks))
                .chain(self.cells.iter().map(Some))
                .collect();
        let rem = slots.len() % DAYS_PER_WEEK;
        if rem != 0 {
            slots.extend(iter::repeat_n(None, DAYS_PER_WEEK - rem));
        }
        slots.chunks(DAYS_PER_WEEK).map(<[_]>::to_vec).collect()
    }
}
