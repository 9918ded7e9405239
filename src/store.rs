use crate::types::Month;
use crate::{BirthdayRecord, RecordId, ValidationError};
use thiserror::Error;
use tracing::debug;

/// Failures from record store operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("no birthday with id {0}")]
    NotFound(RecordId),
    #[error("{name} already has a birthday on {month} {day}")]
    Duplicate { name: String, month: Month, day: u8 },
}

/// Supplier of birthday records for the calendar core.
///
/// The calendar itself only ever reads. Mutation is part of the contract for
/// hosts that keep their roster in process; hosts backed by a remote service
/// implement the same surface over their own transport.
pub trait RecordStore {
    /// Current roster, in insertion order
    fn list(&self) -> Vec<BirthdayRecord>;

    /// Validates and stores a new record under a fresh id
    ///
    /// # Errors
    /// `StoreError::Validation` for bad fields, `StoreError::Duplicate` when
    /// the same name already has a birthday on the same (month, day).
    fn create(&mut self, name: &str, month: u8, day: u8) -> Result<BirthdayRecord, StoreError>;

    /// Replaces every field of an existing record
    ///
    /// # Errors
    /// `StoreError::NotFound` for an unknown id, plus the same validation and
    /// duplicate failures as `create`. On error the stored record is unchanged.
    fn update(
        &mut self,
        id: RecordId,
        name: &str,
        month: u8,
        day: u8,
    ) -> Result<BirthdayRecord, StoreError>;

    /// Removes a record
    ///
    /// # Errors
    /// `StoreError::NotFound` when no record has the id.
    fn delete(&mut self, id: RecordId) -> Result<(), StoreError>;
}

/// Vec-backed store for tests, demos and single-process hosts.
///
/// Ids are monotonic and never reused: deleting a record cannot make a later
/// create collide with a stale reference held elsewhere.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    records: Vec<BirthdayRecord>,
    last_id: u64,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a store with existing records, continuing ids after the highest seen
    pub fn from_records(records: Vec<BirthdayRecord>) -> Self {
        let last_id = records
            .iter()
            .map(|record| record.id().get())
            .max()
            .unwrap_or(0);
        Self { records, last_id }
    }

    fn position(&self, id: RecordId) -> Option<usize> {
        self.records.iter().position(|record| record.id() == id)
    }

    /// Same trimmed name (case-insensitive) on the same (month, day)
    fn is_duplicate(&self, name: &str, month: Month, day: u8, exclude: Option<RecordId>) -> bool {
        let name = name.trim().to_lowercase();
        self.records.iter().any(|record| {
            exclude != Some(record.id())
                && record.falls_on(month, day)
                && record.name().to_lowercase() == name
        })
    }
}

impl RecordStore for InMemoryStore {
    fn list(&self) -> Vec<BirthdayRecord> {
        self.records.clone()
    }

    fn create(&mut self, name: &str, month: u8, day: u8) -> Result<BirthdayRecord, StoreError> {
        let month = Month::new(month)?;
        let id = RecordId::new(self.last_id + 1)?;
        let record = BirthdayRecord::new(id, name, month, day)?;

        if self.is_duplicate(record.name(), month, record.day().get(), None) {
            return Err(StoreError::Duplicate {
                name: record.name().to_owned(),
                month,
                day: record.day().get(),
            });
        }

        self.last_id += 1;
        debug!(id = %record.id(), name = record.name(), "created birthday record");
        self.records.push(record.clone());
        Ok(record)
    }

    fn update(
        &mut self,
        id: RecordId,
        name: &str,
        month: u8,
        day: u8,
    ) -> Result<BirthdayRecord, StoreError> {
        let index = self.position(id).ok_or(StoreError::NotFound(id))?;
        let month = Month::new(month)?;
        let record = BirthdayRecord::new(id, name, month, day)?;

        if self.is_duplicate(record.name(), month, record.day().get(), Some(id)) {
            return Err(StoreError::Duplicate {
                name: record.name().to_owned(),
                month,
                day: record.day().get(),
            });
        }

        debug!(id = %id, "updated birthday record");
        self.records[index] = record.clone();
        Ok(record)
    }

    fn delete(&mut self, id: RecordId) -> Result<(), StoreError> {
        let index = self.position(id).ok_or(StoreError::NotFound(id))?;
        self.records.remove(index);
        debug!(id = %id, "deleted birthday record");
        Ok(())
    }
}
