use crate::occurrence;
use crate::prelude::*;
use crate::BirthdayRecord;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// How soon an upcoming birthday lands, for badge styling and emphasis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
pub enum Urgency {
    #[display(fmt = "today")]
    Today,
    #[display(fmt = "tomorrow")]
    Tomorrow,
    #[display(fmt = "this week")]
    ThisWeek,
    #[display(fmt = "this month")]
    ThisMonth,
    #[display(fmt = "later")]
    Later,
}

impl Urgency {
    /// Buckets an occurrence relative to today. The day counts win over the
    /// month test, so a birthday four days into next month is still
    /// `ThisWeek`, and a same-named month a year out is just `Later`.
    fn classify(days: u32, occurrence: NaiveDate, today: NaiveDate) -> Self {
        match days {
            0 => Self::Today,
            1 => Self::Tomorrow,
            2..=7 => Self::ThisWeek,
            _ if occurrence.year() == today.year() && occurrence.month() == today.month() => {
                Self::ThisMonth
            }
            _ => Self::Later,
        }
    }
}

/// A birthday projected onto the calendar: the record plus when it next
/// occurs. Serializes with the record fields inlined, ready for a widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingEntry {
    #[serde(flatten)]
    pub record: BirthdayRecord,
    pub days_until: u32,
    pub next_occurrence: NaiveDate,
    pub urgency: Urgency,
}

impl UpcomingEntry {
    /// Projects one record relative to today
    pub fn new(record: BirthdayRecord, today: NaiveDate) -> Self {
        let next = occurrence::next_occurrence(record.month(), record.day(), today);
        let days = occurrence::days_until(record.month(), record.day(), today);
        Self {
            record,
            days_until: days,
            next_occurrence: next,
            urgency: Urgency::classify(days, next, today),
        }
    }
}

/// Every record projected and sorted soonest-first.
///
/// The sort is stable, so records sharing a day keep their input order;
/// two birthdays on the same date never swap between renders.
pub fn upcoming(records: &[BirthdayRecord], today: NaiveDate) -> Vec<UpcomingEntry> {
    let mut entries: Vec<UpcomingEntry> = records
        .iter()
        .map(|record| UpcomingEntry::new(record.clone(), today))
        .collect();
    entries.sort_by_key(|entry| entry.days_until);
    entries
}

/// The first `n` of [`upcoming`]; everything when fewer than `n` records exist
pub fn top_n(records: &[BirthdayRecord], today: NaiveDate, n: usize) -> Vec<UpcomingEntry> {
    let mut entries = upcoming(records, today);
    entries.truncate(n);
    entries
}
