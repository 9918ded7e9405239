/// Highest month index (December; month indexes are zero-based)
pub const MAX_MONTH_INDEX: u8 = 11;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Longest month length, used for day bounds when no month is in scope
pub const MAX_DAY: u8 = 31;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month, indexed by zero-based month
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 12] = [
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// English month names, indexed by zero-based month
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Last year the month cursor may reach (inclusive)
pub const NAVIGATION_CEILING_YEAR: i32 = 2100;

/// Columns in a calendar grid row
pub const DAYS_PER_WEEK: usize = 7;

/// Entries shown in the upcoming-birthdays widget when no limit is configured
pub const DEFAULT_UPCOMING_LIMIT: usize = 7;
