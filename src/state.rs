use crate::config::{CalendarConfig, Capabilities};
use crate::grid::MonthGrid;
use crate::navigator::{Boundary, MonthNavigator, YearMonth};
use crate::upcoming::{UpcomingEntry, top_n, upcoming};
use crate::BirthdayRecord;
use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

/// Host-driven inputs to the calendar state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Fresh roster from the record store
    RecordsLoaded(Vec<BirthdayRecord>),
    /// Page one month forward
    Advance,
    /// Page one month back
    Retreat,
    /// Snap back to the current month
    JumpToToday,
    /// Filter the roster by name
    SetSearchQuery(String),
    /// Drop the roster filter
    ClearSearchQuery,
}

/// Why an action was ignored; the state is unchanged when one is returned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error(transparent)]
    Boundary(#[from] Boundary),
    #[error("search is not enabled for this calendar")]
    SearchDisabled,
}

/// Everything a renderer needs to draw one frame of the calendar
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewModel {
    pub cursor: YearMonth,
    pub month_label: String,
    pub grid: MonthGrid,
    /// Widget slice, capped at the configured limit
    pub upcoming: Vec<UpcomingEntry>,
    /// Full roster soonest-first, after the search filter
    pub roster: Vec<UpcomingEntry>,
    pub can_retreat: bool,
    pub can_advance: bool,
    pub capabilities: Capabilities,
    pub search_query: String,
}

/// The calendar's whole mutable state: a roster snapshot, the month cursor
/// and the search box.
///
/// Hosts funnel every change through [`CalendarState::apply`] and then call
/// [`CalendarState::render`] for a fresh [`ViewModel`]; presentation stays
/// entirely outside. `today` is threaded into both calls rather than read
/// from a clock, which keeps the whole cycle deterministic under test.
#[derive(Debug, Clone)]
pub struct CalendarState {
    config: CalendarConfig,
    records: Vec<BirthdayRecord>,
    navigator: MonthNavigator,
    search_query: String,
}

impl CalendarState {
    pub fn new(config: CalendarConfig, today: NaiveDate) -> Self {
        Self {
            config,
            records: Vec::new(),
            navigator: MonthNavigator::new(today),
            search_query: String::new(),
        }
    }

    #[inline]
    pub fn records(&self) -> &[BirthdayRecord] {
        &self.records
    }

    #[inline]
    pub const fn config(&self) -> &CalendarConfig {
        &self.config
    }

    #[inline]
    pub const fn cursor(&self) -> YearMonth {
        self.navigator.cursor()
    }

    /// Applies one action; rejected actions leave the state untouched
    ///
    /// # Errors
    /// `Rejection::Boundary` when navigation hits the floor or ceiling,
    /// `Rejection::SearchDisabled` when filtering without the capability.
    pub fn apply(&mut self, action: Action, today: NaiveDate) -> Result<(), Rejection> {
        let outcome = match action {
            Action::RecordsLoaded(records) => {
                self.records = records;
                Ok(())
            }
            Action::Advance => self.navigator.advance().map(drop).map_err(Rejection::from),
            Action::Retreat => self
                .navigator
                .retreat(today)
                .map(drop)
                .map_err(Rejection::from),
            Action::JumpToToday => {
                self.navigator.jump_to_today(today);
                Ok(())
            }
            Action::SetSearchQuery(query) => {
                if self.config.capabilities.search {
                    self.search_query = query;
                    Ok(())
                } else {
                    Err(Rejection::SearchDisabled)
                }
            }
            Action::ClearSearchQuery => {
                self.search_query.clear();
                Ok(())
            }
        };

        if let Err(rejection) = outcome {
            debug!(%rejection, "calendar action rejected");
            return Err(rejection);
        }
        Ok(())
    }

    /// Projects the current state onto render-ready models
    pub fn render(&self, today: NaiveDate) -> ViewModel {
        let cursor = self.navigator.cursor();
        ViewModel {
            cursor,
            month_label: cursor.to_string(),
            grid: MonthGrid::build(cursor.year(), cursor.month(), &self.records, today),
            upcoming: top_n(&self.records, today, self.config.upcoming_limit),
            roster: upcoming(&self.filtered_records(), today),
            can_retreat: self.navigator.can_retreat(today),
            can_advance: self.navigator.can_advance(),
            capabilities: self.config.capabilities,
            search_query: self.search_query.clone(),
        }
    }

    /// Records passing the active search filter. The filter only bites when
    /// the capability is on and the query is non-blank; it never touches the
    /// grid or the upcoming widget.
    fn filtered_records(&self) -> Vec<BirthdayRecord> {
        let needle = self.search_query.trim().to_lowercase();
        if !self.config.capabilities.search || needle.is_empty() {
            return self.records.clone();
        }
        self.records
            .iter()
            .filter(|record| record.name().to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }
}
