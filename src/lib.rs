mod config;
mod consts;
mod grid;
mod navigator;
mod occurrence;
mod prelude;
mod state;
mod store;
mod types;
mod upcoming;

#[cfg(test)]
pub(crate) mod test_utils;

pub use config::{CalendarConfig, Capabilities};
pub use consts::*;
pub use grid::{CalendarCell, MonthGrid};
pub use navigator::{Boundary, MonthNavigator, YearMonth};
pub use occurrence::{days_until, next_occurrence, occurrence_in_year};
pub use state::{Action, CalendarState, Rejection, ViewModel};
pub use store::{InMemoryStore, RecordStore, StoreError};
pub use types::{DayOfMonth, Month, days_in_month, is_leap_year, max_days_in_month};
pub use upcoming::{UpcomingEntry, Urgency, top_n, upcoming};

use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU64;

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ValidationError {
    #[display(fmt = "Invalid month index: {} (must be 0-{})", "_0", MAX_MONTH_INDEX)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day: {} (must be {}-{})", "_0", MIN_DAY, MAX_DAY)]
    DayOutOfRange(u8),
    #[display(fmt = "Invalid day {day} for {month}")]
    InvalidDay { month: Month, day: u8 },
    #[display(fmt = "Name must not be empty")]
    EmptyName,
    #[display(fmt = "Record id must be non-zero")]
    InvalidId,
}

impl std::error::Error for ValidationError {}

/// Opaque identifier for a stored birthday record.
/// Uses `NonZeroU64` internally, so 0 is not a valid id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct RecordId(NonZeroU64);

impl RecordId {
    /// Creates a new RecordId, validating that it's non-zero
    ///
    /// # Errors
    /// Returns `ValidationError::InvalidId` if the value is 0.
    pub fn new(value: u64) -> Result<Self, ValidationError> {
        NonZeroU64::new(value)
            .map(Self)
            .ok_or(ValidationError::InvalidId)
    }

    /// Returns the id value as u64
    #[inline]
    pub const fn get(self) -> u64 {
        self.0.get()
    }
}

impl TryFrom<u64> for RecordId {
    type Error = ValidationError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RecordId> for u64 {
    fn from(id: RecordId) -> Self {
        id.0.get()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stored birthday: a person plus the year-less (month, day) their
/// anniversary falls on.
///
/// Invariants hold by construction: the name is trimmed and non-empty, and
/// the day fits the month (February admits 29, see [`DayOfMonth`]). The wire
/// shape is `{"id": 1, "name": "Ada", "month": 2, "day": 9}` with a
/// zero-based month, and deserialization re-validates every field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RecordDraft")]
pub struct BirthdayRecord {
    id: RecordId,
    name: String,
    month: Month,
    day: DayOfMonth,
}

impl BirthdayRecord {
    /// Creates a new record, trimming the name and validating the day
    /// against the month
    ///
    /// # Errors
    /// Returns `ValidationError::EmptyName` if the name is blank, or
    /// `ValidationError::InvalidDay` if the day doesn't fit the month.
    pub fn new(id: RecordId, name: &str, month: Month, day: u8) -> Result<Self, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        let day = DayOfMonth::new(day, month)?;
        Ok(Self {
            id,
            name: name.to_owned(),
            month,
            day,
        })
    }

    #[inline]
    pub const fn id(&self) -> RecordId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub const fn month(&self) -> Month {
        self.month
    }

    #[inline]
    pub const fn day(&self) -> DayOfMonth {
        self.day
    }

    /// True when the anniversary falls on the given month and day
    pub fn falls_on(&self, month: Month, day: u8) -> bool {
        self.month == month && self.day.get() == day
    }
}

impl fmt::Display for BirthdayRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} {}", self.name, self.month, self.day)
    }
}

/// Raw wire shape of a record, validated into [`BirthdayRecord`] on deserialization
#[derive(Debug, Deserialize)]
struct RecordDraft {
    id: u64,
    name: String,
    month: u8,
    day: u8,
}

impl TryFrom<RecordDraft> for BirthdayRecord {
    type Error = ValidationError;

    fn try_from(draft: RecordDraft) -> Result<Self, Self::Error> {
        let id = RecordId::new(draft.id)?;
        let month = Month::new(draft.month)?;
        Self::new(id, &draft.name, month, draft.day)
    }
}
