use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::solar_data::{SolarData, SolarDataStore, StoreError};

use super::error::QueryError;
use super::request::{QueryKind, SolarDataQuery};
use super::{QueryOutcome, Records};

/// Applies the found/not-found policy to lookups against an injected store.
pub struct QueryService<S> {
    store: S,
}

impl<S: SolarDataStore> QueryService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Every record, or `NotFound` when the store is empty.
    pub fn all(&self) -> Result<QueryOutcome<Vec<SolarData>>, QueryError> {
        let records = self.store.get_all().map_err(|e| storage_failure(QueryKind::All, e))?;
        Ok(collection(QueryKind::All, None, records))
    }

    /// The record for exactly `date`.
    ///
    /// A sentinel record (id <= 0) from the store counts as absent.
    pub fn by_date(&self, date: NaiveDate) -> Result<QueryOutcome<SolarData>, QueryError> {
        let record = self
            .store
            .get_by_date(date)
            .map_err(|e| storage_failure(QueryKind::ByDate, e))?
            .filter(|record| !record.is_sentinel());
        debug!(kind = %QueryKind::ByDate, %date, found = record.is_some(), "solar data query");
        Ok(match record {
            Some(record) => QueryOutcome::Found(record),
            None => QueryOutcome::NotFound,
        })
    }

    /// Records in the year and month of `date`.
    pub fn by_month(&self, date: NaiveDate) -> Result<QueryOutcome<Vec<SolarData>>, QueryError> {
        let records = self
            .store
            .get_by_month(date)
            .map_err(|e| storage_failure(QueryKind::ByMonth, e))?;
        Ok(collection(QueryKind::ByMonth, Some(date), records))
    }

    /// Records in the year of `date`.
    pub fn by_year(&self, date: NaiveDate) -> Result<QueryOutcome<Vec<SolarData>>, QueryError> {
        let records = self
            .store
            .get_by_year(date)
            .map_err(|e| storage_failure(QueryKind::ByYear, e))?;
        Ok(collection(QueryKind::ByYear, Some(date), records))
    }

    /// Dispatch a logical request.
    pub fn execute(&self, query: &SolarDataQuery) -> Result<QueryOutcome<Records>, QueryError> {
        Ok(match *query {
            SolarDataQuery::All => self.all()?.map(Records::Many),
            SolarDataQuery::ByDate(date) => self.by_date(date)?.map(Records::One),
            SolarDataQuery::ByMonth(date) => self.by_month(date)?.map(Records::Many),
            SolarDataQuery::ByYear(date) => self.by_year(date)?.map(Records::Many),
        })
    }
}

fn collection(
    kind: QueryKind,
    date: Option<NaiveDate>,
    records: Vec<SolarData>,
) -> QueryOutcome<Vec<SolarData>> {
    debug!(%kind, date = ?date, count = records.len(), "solar data query");
    if records.is_empty() {
        QueryOutcome::NotFound
    } else {
        QueryOutcome::Found(records)
    }
}

fn storage_failure(kind: QueryKind, err: StoreError) -> QueryError {
    warn!(%kind, error = %err, "solar data query failed");
    QueryError::StorageUnavailable(err)
}
