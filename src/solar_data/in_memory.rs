//! InMemorySolarDataStore - ordered in-memory store for solar production records.

use std::collections::{BTreeMap, HashSet};
use std::ops::Bound;
use std::path::Path;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{Datelike, Months, NaiveDate};
use tracing::info;

use super::{SolarData, SolarDataStore, StoreError};

#[derive(Default)]
struct Records {
    /// Keyed by `(date, id)` so month and year lookups are range scans.
    by_date: BTreeMap<(NaiveDate, i64), SolarData>,
    ids: HashSet<i64>,
}

impl Records {
    fn insert(&mut self, record: SolarData) -> Result<(), StoreError> {
        if record.is_sentinel() {
            return Err(StoreError::InvalidId(record.id));
        }
        if !self.ids.insert(record.id) {
            return Err(StoreError::DuplicateId(record.id));
        }
        self.by_date.insert((record.date, record.id), record);
        Ok(())
    }

    /// Records dated in `[start, end)`; an open end scans to the last record.
    fn scan(&self, start: NaiveDate, end: Option<NaiveDate>) -> Vec<SolarData> {
        let lower = Bound::Included((start, i64::MIN));
        let upper = match end {
            Some(end) => Bound::Excluded((end, i64::MIN)),
            None => Bound::Unbounded,
        };
        self.by_date
            .range((lower, upper))
            .map(|(_, record)| record.clone())
            .collect()
    }
}

/// In-memory solar data store backed by an ordered map.
///
/// Ids are unique and positive; dates are not required to be unique.
/// Clone-friendly via Arc.
#[derive(Clone, Default)]
pub struct InMemorySolarDataStore {
    records: Arc<RwLock<Records>>,
}

impl InMemorySolarDataStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from a set of records, rejecting duplicate or non-positive ids.
    pub fn from_records<I>(records: I) -> Result<Self, StoreError>
    where
        I: IntoIterator<Item = SolarData>,
    {
        let store = Self::new();
        {
            let mut guard = store.write()?;
            for record in records {
                guard.insert(record)?;
            }
        }
        Ok(store)
    }

    /// Build a store from a JSON array of records.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, StoreError> {
        let records: Vec<SolarData> = serde_json::from_slice(bytes)?;
        Self::from_records(records)
    }

    /// Load a store from a JSON file containing an array of records.
    pub fn load_json_file(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        let store = Self::from_json_slice(&bytes)?;
        info!(path = %path.display(), records = store.count()?, "loaded solar data");
        Ok(store)
    }

    /// Add one record. Fails if its id is already stored or not positive.
    pub fn insert(&self, record: SolarData) -> Result<(), StoreError> {
        self.write()?.insert(record)
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Records>, StoreError> {
        self.records
            .read()
            .map_err(|_| StoreError::Unavailable("lock poisoned".into()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Records>, StoreError> {
        self.records
            .write()
            .map_err(|_| StoreError::Unavailable("lock poisoned".into()))
    }
}

impl SolarDataStore for InMemorySolarDataStore {
    fn get_all(&self) -> Result<Vec<SolarData>, StoreError> {
        let records = self.read()?;
        Ok(records.by_date.values().cloned().collect())
    }

    fn get_by_date(&self, date: NaiveDate) -> Result<Option<SolarData>, StoreError> {
        let records = self.read()?;
        Ok(records
            .by_date
            .range((date, i64::MIN)..=(date, i64::MAX))
            .next()
            .map(|(_, record)| record.clone()))
    }

    fn get_by_month(&self, date: NaiveDate) -> Result<Vec<SolarData>, StoreError> {
        let start = date.with_day(1).unwrap_or(date);
        let end = start.checked_add_months(Months::new(1));
        let records = self.read()?;
        Ok(records.scan(start, end))
    }

    fn get_by_year(&self, date: NaiveDate) -> Result<Vec<SolarData>, StoreError> {
        let start = date.with_ordinal(1).unwrap_or(date);
        let end = NaiveDate::from_ymd_opt(date.year() + 1, 1, 1);
        let records = self.read()?;
        Ok(records.scan(start, end))
    }

    fn count(&self) -> Result<usize, StoreError> {
        Ok(self.read()?.ids.len())
    }
}
