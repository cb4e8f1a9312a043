//! In-memory point store.
//!
//! `LocationStore` holds every location sample the tracker has seen, guarded
//! by a single mutex. Writers append one record per critical section; readers
//! copy the whole list under the same lock and sort the copy after releasing
//! it, so a snapshot never observes a half-applied write.
//!
//! An optional retention limit caps the number of records. When an append
//! pushes the count over the limit, the oldest records by insertion order are
//! dropped.

mod record;
#[cfg(test)]
mod tests;

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};

use crate::config::DEFAULT_LATEST_LIMIT;

pub use record::{validate_coordinates, LocationRecord};

/// Thread-safe container shared by the API and the static map stage.
#[derive(Debug, Default)]
pub struct LocationStore {
    records: Mutex<VecDeque<LocationRecord>>,
    history_limit: Option<usize>,
}

impl LocationStore {
    /// Creates an empty store.
    ///
    /// `history_limit` is the maximum number of records kept; `None` keeps
    /// everything.
    pub fn new(history_limit: Option<usize>) -> Self {
        Self {
            records: Mutex::new(VecDeque::new()),
            history_limit,
        }
    }

    /// The configured retention limit.
    pub fn history_limit(&self) -> Option<usize> {
        self.history_limit
    }

    // Records are immutable and every mutation is a single push/pop, so a
    // panic in another holder cannot leave the list inconsistent.
    fn lock(&self) -> MutexGuard<'_, VecDeque<LocationRecord>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Appends a record, evicting the oldest ones if over the retention limit.
    pub fn add(&self, record: LocationRecord) {
        let evicted = {
            let mut records = self.lock();
            records.push_back(record);
            match self.history_limit {
                Some(limit) if records.len() > limit => {
                    let excess = records.len() - limit;
                    records.drain(..excess);
                    excess
                }
                _ => 0,
            }
        };
        if evicted > 0 {
            log::debug!("Evicted {} record(s) over history limit", evicted);
        }
    }

    /// Adds each record in order.
    ///
    /// The lock is taken per record: a concurrent snapshot may see part of the
    /// batch.
    pub fn bulk_add<I>(&self, records: I)
    where
        I: IntoIterator<Item = LocationRecord>,
    {
        for record in records {
            self.add(record);
        }
    }

    /// Returns every record sorted ascending by `created_at`.
    ///
    /// Records sharing a timestamp keep their insertion order.
    pub fn snapshot(&self) -> Vec<LocationRecord> {
        let mut records: Vec<LocationRecord> = self.lock().iter().cloned().collect();
        records.sort_by_key(LocationRecord::created_at);
        records
    }

    /// Returns the snapshot restricted to `start <= created_at <= end`.
    ///
    /// A missing bound is open on that side.
    pub fn filter_by_date(
        &self,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> Vec<LocationRecord> {
        self.snapshot()
            .into_iter()
            .filter(|r| start.map_or(true, |s| r.created_at() >= s))
            .filter(|r| end.map_or(true, |e| r.created_at() <= e))
            .collect()
    }

    /// Returns the `limit` most recent records, oldest first.
    ///
    /// `None` uses `DEFAULT_LATEST_LIMIT` (10).
    pub fn latest(&self, limit: Option<usize>) -> Vec<LocationRecord> {
        let limit = limit.unwrap_or(DEFAULT_LATEST_LIMIT);
        let mut records = self.snapshot();
        let skip = records.len().saturating_sub(limit);
        records.drain(..skip);
        records
    }

    /// Removes every record.
    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Number of records currently held.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// True when the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}
