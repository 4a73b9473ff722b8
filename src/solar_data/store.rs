//! SolarDataStore - Abstract read-only storage for solar production records.

use std::sync::Arc;

use chrono::NaiveDate;

use super::{SolarData, StoreError};

/// Read-only lookups over a set of solar production records.
///
/// Every method is a pure query. An empty result is `Ok`; `Err` is reserved
/// for the storage itself failing.
pub trait SolarDataStore: Send + Sync {
    /// All records, ordered by date and then id.
    fn get_all(&self) -> Result<Vec<SolarData>, StoreError>;

    /// The record for exactly this day. Returns None if there is none.
    ///
    /// If several records share the day, the one with the lowest id wins.
    fn get_by_date(&self, date: NaiveDate) -> Result<Option<SolarData>, StoreError>;

    /// Records in the same year and month as `date`. The day is ignored.
    fn get_by_month(&self, date: NaiveDate) -> Result<Vec<SolarData>, StoreError>;

    /// Records in the same year as `date`. Month and day are ignored.
    fn get_by_year(&self, date: NaiveDate) -> Result<Vec<SolarData>, StoreError>;

    /// Number of stored records.
    fn count(&self) -> Result<usize, StoreError> {
        Ok(self.get_all()?.len())
    }
}

impl<S: SolarDataStore + ?Sized> SolarDataStore for Arc<S> {
    fn get_all(&self) -> Result<Vec<SolarData>, StoreError> {
        (**self).get_all()
    }

    fn get_by_date(&self, date: NaiveDate) -> Result<Option<SolarData>, StoreError> {
        (**self).get_by_date(date)
    }

    fn get_by_month(&self, date: NaiveDate) -> Result<Vec<SolarData>, StoreError> {
        (**self).get_by_month(date)
    }

    fn get_by_year(&self, date: NaiveDate) -> Result<Vec<SolarData>, StoreError> {
        (**self).get_by_year(date)
    }

    fn count(&self) -> Result<usize, StoreError> {
        (**self).count()
    }
}
