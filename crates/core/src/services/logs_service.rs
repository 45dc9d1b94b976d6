use chrono::NaiveDate;

use crate::errors::CoreError;
use crate::models::coerce::sanitize;
use crate::models::document::{Document, LogEntry};

/// What a log upsert did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogChange {
    /// A new entry was inserted for this date
    Added,
    /// An existing entry for this date had its value overwritten
    Updated,
}

/// Mutation operations over the daily value series.
///
/// Invariant maintained here: at most one entry per date, and the
/// sequence is sorted ascending by calendar date after every upsert.
pub struct LogsService;

impl LogsService {
    pub fn new() -> Self {
        Self
    }

    /// Insert or overwrite the entry for `date`.
    ///
    /// Rejects a zero value. A duplicate date overwrites the stored
    /// value rather than appending; a new date is appended and the full
    /// sequence re-sorted, so sparse or out-of-order insertion always
    /// yields a chronological series.
    pub fn upsert(
        &self,
        document: &mut Document,
        date: NaiveDate,
        value: f64,
    ) -> Result<LogChange, CoreError> {
        let value = sanitize(value);
        if value == 0.0 {
            return Err(CoreError::ValidationError("Date and value required".into()));
        }

        if let Some(entry) = document.logs.iter_mut().find(|l| l.date == date) {
            entry.value = value;
            return Ok(LogChange::Updated);
        }

        document.logs.push(LogEntry::new(date, value));
        document.logs.sort_by_key(|l| l.date);
        Ok(LogChange::Added)
    }

    /// Remove the entry at `index`. Out-of-bounds is a no-op;
    /// returns whether anything was removed.
    pub fn delete(&self, document: &mut Document, index: usize) -> bool {
        if index < document.logs.len() {
            document.logs.remove(index);
            true
        } else {
            false
        }
    }
}

impl Default for LogsService {
    fn default() -> Self {
        Self::new()
    }
}
