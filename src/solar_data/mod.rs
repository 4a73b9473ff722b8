//! Solar data - daily production records and the read-only store that serves them.
//!
//! Records are loaded once (from a JSON file, an iterator, or individual
//! inserts) and then queried through the [`SolarDataStore`] trait.
//!
//! ## Example
//!
//! ```ignore
//! use chrono::NaiveDate;
//! use solar_share::{InMemorySolarDataStore, SolarData, SolarDataStore};
//!
//! let day = NaiveDate::from_ymd_opt(2023, 1, 15).unwrap();
//! let store = InMemorySolarDataStore::from_records([SolarData::new(1, day, 12.5)])?;
//!
//! let record = store.get_by_date(day)?;
//! let january = store.get_by_month(day)?;
//! ```

mod in_memory;
mod store;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One day of solar production.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolarData {
    pub id: i64,
    pub date: NaiveDate,
    #[serde(default)]
    pub energy_produced_kwh: f64,
}

impl SolarData {
    pub fn new(id: i64, date: NaiveDate, energy_produced_kwh: f64) -> Self {
        Self {
            id,
            date,
            energy_produced_kwh,
        }
    }

    /// A placeholder record with id 0, as emitted by legacy stores that
    /// signal "no record" with a value instead of an absence.
    pub fn sentinel(date: NaiveDate) -> Self {
        Self::new(0, date, 0.0)
    }

    /// True when this value cannot correspond to a stored record.
    pub fn is_sentinel(&self) -> bool {
        self.id <= 0
    }
}

/// Error type for solar data store operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The backing storage could not be reached or queried.
    Unavailable(String),
    /// A record with this id is already stored.
    DuplicateId(i64),
    /// Ids must be positive.
    InvalidId(i64),
    /// Record serialization/deserialization error.
    Serde(String),
    /// Reading a record source failed.
    Io(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Unavailable(msg) => write!(f, "solar data storage unavailable: {}", msg),
            StoreError::DuplicateId(id) => write!(f, "duplicate solar data id: {}", id),
            StoreError::InvalidId(id) => {
                write!(f, "invalid solar data id {} (ids must be positive)", id)
            }
            StoreError::Serde(msg) => write!(f, "solar data serialization error: {}", msg),
            StoreError::Io(msg) => write!(f, "solar data io error: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serde(err.to_string())
    }
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Io(err.to_string())
    }
}

pub use in_memory::InMemorySolarDataStore;
pub use store::SolarDataStore;
