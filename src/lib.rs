pub mod query;
mod solar_data;

pub use query::{
    parse_date, QueryError, QueryKind, QueryOutcome, QueryService, Records, SolarDataQuery,
};
pub use solar_data::{InMemorySolarDataStore, SolarData, SolarDataStore, StoreError};

// Re-export chrono's date type so callers don't need a direct dependency
pub use chrono::NaiveDate;
