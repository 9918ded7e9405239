use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE, MAX_DAY,
    MAX_MONTH_INDEX, MONTH_NAMES,
};
use crate::ValidationError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;

/// A calendar month held as a zero-based index in the range `0..=MAX_MONTH_INDEX`
/// (0 is January, 11 is December), matching the wire format records travel in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(u8);

impl Month {
    pub const JANUARY: Self = Self(0);
    pub const FEBRUARY: Self = Self(1);
    pub const MARCH: Self = Self(2);
    pub const APRIL: Self = Self(3);
    pub const MAY: Self = Self(4);
    pub const JUNE: Self = Self(5);
    pub const JULY: Self = Self(6);
    pub const AUGUST: Self = Self(7);
    pub const SEPTEMBER: Self = Self(8);
    pub const OCTOBER: Self = Self(9);
    pub const NOVEMBER: Self = Self(10);
    pub const DECEMBER: Self = Self(11);

    /// Creates a new Month from a zero-based index, validating that it's <= `MAX_MONTH_INDEX`
    ///
    /// # Errors
    /// Returns `ValidationError::InvalidMonth` if the index is > `MAX_MONTH_INDEX`.
    pub fn new(index: u8) -> Result<Self, ValidationError> {
        if index > MAX_MONTH_INDEX {
            return Err(ValidationError::InvalidMonth(index));
        }
        Ok(Self(index))
    }

    /// Returns the zero-based month index (0 is January)
    #[inline]
    pub const fn index0(self) -> u8 {
        self.0
    }

    /// Returns the one-based month number (1 is January), as chrono expects it
    #[inline]
    pub const fn number(self) -> u32 {
        self.0 as u32 + 1
    }

    /// Returns the English month name
    #[inline]
    pub const fn name(self) -> &'static str {
        MONTH_NAMES[self.0 as usize]
    }

    /// The next month, wrapping December around to January
    #[inline]
    pub const fn succ_wrapping(self) -> Self {
        Self((self.0 + 1) % (MAX_MONTH_INDEX + 1))
    }

    /// The previous month, wrapping January around to December
    #[inline]
    pub const fn pred_wrapping(self) -> Self {
        Self((self.0 + MAX_MONTH_INDEX) % (MAX_MONTH_INDEX + 1))
    }
}

impl TryFrom<u8> for Month {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0
    }
}

impl From<NaiveDate> for Month {
    fn from(date: NaiveDate) -> Self {
        // chrono's month0 is already zero-based and in range
        Self(date.month0() as u8)
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A day-of-month value guaranteed to be valid for a given month in *some* year.
/// Uses `NonZeroU8` internally, so 0 is not a valid day.
///
/// Records carry no year, so February admits 29: a leap-day birthday is a
/// legitimate record, and the per-year occurrence math decides how to place it
/// in non-leap years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct DayOfMonth(NonZeroU8);

impl DayOfMonth {
    /// Creates a new DayOfMonth, validating that it's non-zero and within the
    /// month's maximum length over all years
    ///
    /// # Errors
    /// Returns `ValidationError::InvalidDay` if the value is 0 or too large for the month.
    pub fn new(value: u8, month: Month) -> Result<Self, ValidationError> {
        let non_zero = NonZeroU8::new(value).ok_or(ValidationError::InvalidDay {
            month,
            day: value,
        })?;

        if value > max_days_in_month(month) {
            return Err(ValidationError::InvalidDay { month, day: value });
        }

        Ok(Self(non_zero))
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for DayOfMonth {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        // Can't validate against a month without context, so bound by the longest month
        let non_zero = NonZeroU8::new(value).ok_or(ValidationError::DayOutOfRange(value))?;
        if value > MAX_DAY {
            return Err(ValidationError::DayOutOfRange(value));
        }
        Ok(Self(non_zero))
    }
}

impl From<DayOfMonth> for u8 {
    fn from(day: DayOfMonth) -> Self {
        day.0.get()
    }
}

impl fmt::Display for DayOfMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Helper functions

pub const fn is_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Days in the given month of the given year
pub const fn days_in_month(year: i32, month: Month) -> u8 {
    if month.index0() == Month::FEBRUARY.index0() && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month.index0() as usize]
    }
}

/// Days in the given month in its longest year (February counts 29)
pub const fn max_days_in_month(month: Month) -> u8 {
    if month.index0() == Month::FEBRUARY.index0() {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month.index0() as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_new_valid() {
        for m in 0..=11 {
            assert!(Month::new(m).is_ok(), "Month index {m} should be valid");
        }
    }

    #[test]
    fn test_month_new_invalid_too_large() {
        let result = Month::new(12);
        assert!(matches!(result, Err(ValidationError::InvalidMonth(12))));

        let result = Month::new(255);
        assert!(matches!(result, Err(ValidationError::InvalidMonth(255))));
    }

    #[test]
    fn test_month_index0_and_number() {
        let month = Month::new(2).unwrap();
        assert_eq!(month.index0(), 2);
        assert_eq!(month.number(), 3);
    }

    #[test]
    fn test_month_name() {
        assert_eq!(Month::JANUARY.name(), "January");
        assert_eq!(Month::new(2).unwrap().name(), "March");
        assert_eq!(Month::DECEMBER.name(), "December");
    }

    #[test]
    fn test_month_display() {
        let month = Month::new(7).unwrap();
        assert_eq!(month.to_string(), "August");
    }

    #[test]
    fn test_month_constants_match_indexes() {
        assert_eq!(Month::JANUARY, Month::new(0).unwrap());
        assert_eq!(Month::FEBRUARY, Month::new(1).unwrap());
        assert_eq!(Month::DECEMBER, Month::new(11).unwrap());
    }

    #[test]
    fn test_month_try_from_u8() {
        let month: Month = 8.try_into().unwrap();
        assert_eq!(month.index0(), 8);

        let result: Result<Month, _> = 12.try_into();
        assert!(result.is_err());
    }

    #[test]
    fn test_month_into_u8() {
        let month = Month::new(8).unwrap();
        let value: u8 = month.into();
        assert_eq!(value, 8);
    }

    #[test]
    fn test_month_from_naive_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        assert_eq!(Month::from(date), Month::MARCH);

        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(Month::from(date), Month::JANUARY);

        let date = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        assert_eq!(Month::from(date), Month::DECEMBER);
    }

    #[test]
    fn test_month_succ_wrapping() {
        assert_eq!(Month::JANUARY.succ_wrapping(), Month::FEBRUARY);
        assert_eq!(Month::NOVEMBER.succ_wrapping(), Month::DECEMBER);
        assert_eq!(Month::DECEMBER.succ_wrapping(), Month::JANUARY);
    }

    #[test]
    fn test_month_pred_wrapping() {
        assert_eq!(Month::DECEMBER.pred_wrapping(), Month::NOVEMBER);
        assert_eq!(Month::FEBRUARY.pred_wrapping(), Month::JANUARY);
        assert_eq!(Month::JANUARY.pred_wrapping(), Month::DECEMBER);
    }

    #[test]
    fn test_month_ordering() {
        let m1 = Month::new(2).unwrap();
        let m2 = Month::new(8).unwrap();
        assert!(m1 < m2);
        assert!(m2 > m1);
        assert_eq!(m1, m1);
    }

    #[test]
    fn test_month_serde() {
        let month = Month::new(2).unwrap();
        let json = serde_json::to_string(&month).unwrap();
        assert_eq!(json, "2");

        let parsed: Month = serde_json::from_str(&json).unwrap();
        assert_eq!(month, parsed);
    }

    #[test]
    fn test_month_serde_rejects_out_of_range() {
        let result: Result<Month, _> = serde_json::from_str("12");
        assert!(result.is_err());
    }

    #[test]
    fn test_day_of_month_new_valid() {
        // January - 31 days
        assert!(DayOfMonth::new(1, Month::JANUARY).is_ok());
        assert!(DayOfMonth::new(31, Month::JANUARY).is_ok());

        // February admits the leap day, since records carry no year
        assert!(DayOfMonth::new(28, Month::FEBRUARY).is_ok());
        assert!(DayOfMonth::new(29, Month::FEBRUARY).is_ok());
        assert!(DayOfMonth::new(30, Month::FEBRUARY).is_err());

        // April - 30 days
        assert!(DayOfMonth::new(30, Month::APRIL).is_ok());
        assert!(DayOfMonth::new(31, Month::APRIL).is_err());
    }

    #[test]
    fn test_day_of_month_new_invalid_zero() {
        let result = DayOfMonth::new(0, Month::JANUARY);
        assert!(matches!(result, Err(ValidationError::InvalidDay { .. })));
    }

    #[test]
    fn test_day_of_month_new_invalid_too_large() {
        let result = DayOfMonth::new(32, Month::JANUARY);
        assert!(matches!(
            result,
            Err(ValidationError::InvalidDay {
                month: Month::JANUARY,
                day: 32
            })
        ));
    }

    #[test]
    fn test_day_of_month_get() {
        let day = DayOfMonth::new(15, Month::AUGUST).unwrap();
        assert_eq!(day.get(), 15);
    }

    #[test]
    fn test_day_of_month_display() {
        let day = DayOfMonth::new(15, Month::AUGUST).unwrap();
        assert_eq!(day.to_string(), "15");
    }

    #[test]
    fn test_day_of_month_try_from_u8() {
        // Valid day (context-free validation)
        let day: DayOfMonth = 15.try_into().unwrap();
        assert_eq!(day.get(), 15);

        // Zero is invalid
        let result: Result<DayOfMonth, _> = 0.try_into();
        assert!(result.is_err());

        // 32 exceeds the longest month
        let result: Result<DayOfMonth, _> = 32.try_into();
        assert!(result.is_err());
    }

    #[test]
    fn test_day_of_month_into_u8() {
        let day = DayOfMonth::new(15, Month::AUGUST).unwrap();
        let value: u8 = day.into();
        assert_eq!(value, 15);
    }

    #[test]
    fn test_day_of_month_ordering() {
        let d1 = DayOfMonth::new(10, Month::AUGUST).unwrap();
        let d2 = DayOfMonth::new(20, Month::AUGUST).unwrap();
        assert!(d1 < d2);
        assert!(d2 > d1);
        assert_eq!(d1, d1);
    }

    #[test]
    fn test_day_of_month_serde() {
        let day = DayOfMonth::new(15, Month::AUGUST).unwrap();
        let json = serde_json::to_string(&day).unwrap();
        assert_eq!(json, "15");

        let parsed: DayOfMonth = serde_json::from_str(&json).unwrap();
        assert_eq!(day, parsed);
    }

    #[test]
    fn test_is_leap_year_cases() {
        struct TestCase {
            year: i32,
            is_leap: bool,
            description: &'static str,
        }

        let cases = [
            // Divisible by 4
            TestCase {
                year: 2020,
                is_leap: true,
                description: "divisible by 4",
            },
            TestCase {
                year: 2024,
                is_leap: true,
                description: "divisible by 4",
            },
            TestCase {
                year: 2021,
                is_leap: false,
                description: "not divisible by 4",
            },
            TestCase {
                year: 2023,
                is_leap: false,
                description: "not divisible by 4",
            },
            // Century years not divisible by 400
            TestCase {
                year: 1900,
                is_leap: false,
                description: "century not divisible by 400",
            },
            TestCase {
                year: 2100,
                is_leap: false,
                description: "century not divisible by 400",
            },
            TestCase {
                year: 2200,
                is_leap: false,
                description: "century not divisible by 400",
            },
            // Divisible by 400
            TestCase {
                year: 2000,
                is_leap: true,
                description: "divisible by 400",
            },
            TestCase {
                year: 2400,
                is_leap: true,
                description: "divisible by 400",
            },
        ];

        for case in &cases {
            assert_eq!(
                is_leap_year(case.year),
                case.is_leap,
                "Year {} ({}): expected {}",
                case.year,
                case.description,
                if case.is_leap {
                    "leap year"
                } else {
                    "not leap year"
                }
            );
        }
    }

    #[test]
    fn test_days_in_month_31_day_months() {
        for index in [0, 2, 4, 6, 7, 9, 11] {
            let month = Month::new(index).unwrap();
            assert_eq!(
                days_in_month(2024, month),
                31,
                "{} should have 31 days",
                month.name()
            );
        }
    }

    #[test]
    fn test_days_in_month_30_day_months() {
        for index in [3, 5, 8, 10] {
            let month = Month::new(index).unwrap();
            assert_eq!(
                days_in_month(2024, month),
                30,
                "{} should have 30 days",
                month.name()
            );
        }
    }

    #[test]
    fn test_days_in_month_february_non_leap() {
        assert_eq!(days_in_month(2023, Month::FEBRUARY), 28);
        assert_eq!(days_in_month(2021, Month::FEBRUARY), 28);
        assert_eq!(
            days_in_month(1900, Month::FEBRUARY),
            28,
            "Century year not divisible by 400"
        );
    }

    #[test]
    fn test_days_in_month_february_leap() {
        assert_eq!(days_in_month(2024, Month::FEBRUARY), 29);
        assert_eq!(days_in_month(2020, Month::FEBRUARY), 29);
        assert_eq!(
            days_in_month(2000, Month::FEBRUARY),
            29,
            "Century year divisible by 400"
        );
    }

    #[test]
    fn test_max_days_in_month() {
        assert_eq!(max_days_in_month(Month::FEBRUARY), 29);
        assert_eq!(max_days_in_month(Month::JANUARY), 31);
        assert_eq!(max_days_in_month(Month::APRIL), 30);
    }

    #[test]
    fn test_all_months_have_valid_days() {
        // Verify all months in DAYS_IN_MONTH are correct for a non-leap year
        let expected = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for index in 0..=11u8 {
            let month = Month::new(index).unwrap();
            assert_eq!(
                days_in_month(2023, month),
                expected[index as usize],
                "{} has incorrect day count",
                month.name()
            );
        }
    }
}
