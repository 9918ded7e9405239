use crate::consts::NAVIGATION_CEILING_YEAR;
use crate::types::Month;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Signal returned when a navigation step would leave the allowed range.
/// The cursor is left untouched; callers typically disable a control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Boundary {
    #[error("already at the current month")]
    AtFloor,
    #[error("cannot navigate past December {}", NAVIGATION_CEILING_YEAR)]
    AtCeiling,
}

/// A (year, month) pair: one page of the calendar.
///
/// Ordering is year-major, so pages compare the way they appear when
/// flipping through the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct YearMonth {
    year: i32,
    month: Month,
}

impl YearMonth {
    pub const fn new(year: i32, month: Month) -> Self {
        Self { year, month }
    }

    #[inline]
    pub const fn year(self) -> i32 {
        self.year
    }

    #[inline]
    pub const fn month(self) -> Month {
        self.month
    }

    /// The page after this one, rolling December into the next January
    pub fn succ(self) -> Self {
        let year = if self.month == Month::DECEMBER {
            self.year + 1
        } else {
            self.year
        };
        Self {
            year,
            month: self.month.succ_wrapping(),
        }
    }

    /// The page before this one, rolling January into the previous December
    pub fn pred(self) -> Self {
        let year = if self.month == Month::JANUARY {
            self.year - 1
        } else {
            self.year
        };
        Self {
            year,
            month: self.month.pred_wrapping(),
        }
    }
}

impl From<NaiveDate> for YearMonth {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: Month::from(date),
        }
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.month, self.year)
    }
}

/// Month cursor for the calendar, bounded below by the current month and
/// above by December of `NAVIGATION_CEILING_YEAR`.
///
/// The floor is not fixed at construction: it is re-read from the `today`
/// passed to each transition, so a navigator held across a month boundary
/// simply stops retreating at the new current month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthNavigator {
    cursor: YearMonth,
}

impl MonthNavigator {
    /// Upper navigation bound, inclusive
    pub const CEILING: YearMonth = YearMonth::new(NAVIGATION_CEILING_YEAR, Month::DECEMBER);

    pub fn new(today: NaiveDate) -> Self {
        Self {
            cursor: YearMonth::from(today),
        }
    }

    #[inline]
    pub const fn cursor(self) -> YearMonth {
        self.cursor
    }

    /// Moves the cursor one month forward
    ///
    /// # Errors
    /// Returns `Boundary::AtCeiling` when the cursor is on December of
    /// `NAVIGATION_CEILING_YEAR`.
    pub fn advance(&mut self) -> Result<YearMonth, Boundary> {
        if self.cursor >= Self::CEILING {
            return Err(Boundary::AtCeiling);
        }
        self.cursor = self.cursor.succ();
        Ok(self.cursor)
    }

    /// Moves the cursor one month back, never past today's month
    ///
    /// # Errors
    /// Returns `Boundary::AtFloor` when the cursor is already on today's month.
    pub fn retreat(&mut self, today: NaiveDate) -> Result<YearMonth, Boundary> {
        let floor = YearMonth::from(today);
        if self.cursor == floor {
            return Err(Boundary::AtFloor);
        }
        self.cursor = self.cursor.pred();
        if self.cursor < floor {
            // A cursor that slipped behind real time snaps back onto it
            self.cursor = floor;
        }
        Ok(self.cursor)
    }

    /// Resets the cursor to today's month; always succeeds
    pub fn jump_to_today(&mut self, today: NaiveDate) -> YearMonth {
        self.cursor = YearMonth::from(today);
        self.cursor
    }

    /// True when `advance` would move the cursor
    pub fn can_advance(self) -> bool {
        self.cursor < Self::CEILING
    }

    /// True when `retreat` would move the cursor
    pub fn can_retreat(self, today: NaiveDate) -> bool {
        self.cursor > YearMonth::from(today)
    }
}
