//! Query Service — found/not-found policy over a solar data store.
//!
//! `QueryService<S>` owns a [`SolarDataStore`](crate::SolarDataStore)
//! supplied at construction and reduces each lookup to a
//! [`QueryOutcome`]: `Found(payload)` when something matched, `NotFound`
//! when nothing did. Storage failures are errors, never `NotFound`.
//!
//! ## Quick Start
//!
//! ```ignore
//! use solar_share::{InMemorySolarDataStore, QueryOutcome, QueryService, SolarDataQuery};
//!
//! let service = QueryService::new(InMemorySolarDataStore::load_json_file("solar.json")?);
//!
//! match service.by_month(date)? {
//!     QueryOutcome::Found(records) => render(records),
//!     QueryOutcome::NotFound => render_empty(),
//! }
//!
//! // Or from transport strings
//! let query = SolarDataQuery::parse("year", Some("2023-06-01"))?;
//! let outcome = service.execute(&query)?;
//! ```

mod error;
#[cfg(feature = "http")]
pub mod http;
mod request;
mod service;

use serde::Serialize;

use crate::solar_data::SolarData;

pub use error::QueryError;
pub use request::{parse_date, QueryKind, SolarDataQuery};
pub use service::QueryService;

/// Presence-tagged result of a query.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutcome<T> {
    Found(T),
    NotFound,
}

impl<T> QueryOutcome<T> {
    pub fn is_found(&self) -> bool {
        matches!(self, QueryOutcome::Found(_))
    }

    pub fn found(self) -> Option<T> {
        match self {
            QueryOutcome::Found(value) => Some(value),
            QueryOutcome::NotFound => None,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> QueryOutcome<U> {
        match self {
            QueryOutcome::Found(value) => QueryOutcome::Found(f(value)),
            QueryOutcome::NotFound => QueryOutcome::NotFound,
        }
    }
}

/// Payload of a dispatched query: a single record for date lookups, a
/// collection for everything else.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Records {
    One(SolarData),
    Many(Vec<SolarData>),
}

impl Records {
    pub fn len(&self) -> usize {
        match self {
            Records::One(_) => 1,
            Records::Many(records) => records.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn into_vec(self) -> Vec<SolarData> {
        match self {
            Records::One(record) => vec![record],
            Records::Many(records) => records,
        }
    }
}
