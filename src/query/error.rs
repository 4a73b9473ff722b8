//! Error types for solar data queries.

use std::error::Error;
use std::fmt;

use crate::solar_data::StoreError;

/// Error type for query operations.
///
/// "No matching data" is not an error; see [`QueryOutcome::NotFound`](super::QueryOutcome).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// The request could not be turned into a query (unknown kind, bad date).
    InvalidInput(String),
    /// The store could not be reached or queried.
    StorageUnavailable(StoreError),
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryError::InvalidInput(msg) => write!(f, "invalid input: {}", msg),
            QueryError::StorageUnavailable(e) => write!(f, "storage unavailable: {}", e),
        }
    }
}

impl Error for QueryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            QueryError::StorageUnavailable(e) => Some(e),
            QueryError::InvalidInput(_) => None,
        }
    }
}

impl From<StoreError> for QueryError {
    fn from(err: StoreError) -> Self {
        QueryError::StorageUnavailable(err)
    }
}

impl QueryError {
    /// Map this error to an HTTP-style status code.
    pub fn status_code(&self) -> u16 {
        match self {
            QueryError::InvalidInput(_) => 400,
            QueryError::StorageUnavailable(_) => 503,
        }
    }
}
