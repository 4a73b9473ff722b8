//! Logical query requests and their construction from transport strings.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use super::error::QueryError;

/// The four lookup shapes the service answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKind {
    All,
    ByDate,
    ByMonth,
    ByYear,
}

impl QueryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryKind::All => "all",
            QueryKind::ByDate => "date",
            QueryKind::ByMonth => "month",
            QueryKind::ByYear => "year",
        }
    }
}

impl fmt::Display for QueryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QueryKind {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(QueryKind::All),
            "date" | "day" => Ok(QueryKind::ByDate),
            "month" => Ok(QueryKind::ByMonth),
            "year" => Ok(QueryKind::ByYear),
            other => Err(QueryError::InvalidInput(format!(
                "unknown query kind: {}",
                other
            ))),
        }
    }
}

/// A validated lookup request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolarDataQuery {
    All,
    ByDate(NaiveDate),
    /// Only year and month are significant.
    ByMonth(NaiveDate),
    /// Only the year is significant.
    ByYear(NaiveDate),
}

impl SolarDataQuery {
    pub fn kind(&self) -> QueryKind {
        match self {
            SolarDataQuery::All => QueryKind::All,
            SolarDataQuery::ByDate(_) => QueryKind::ByDate,
            SolarDataQuery::ByMonth(_) => QueryKind::ByMonth,
            SolarDataQuery::ByYear(_) => QueryKind::ByYear,
        }
    }

    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            SolarDataQuery::All => None,
            SolarDataQuery::ByDate(date)
            | SolarDataQuery::ByMonth(date)
            | SolarDataQuery::ByYear(date) => Some(*date),
        }
    }

    /// Build a query of the given kind from an optional date string.
    ///
    /// The date is ignored for `All` and required for every other kind.
    pub fn new(kind: QueryKind, date: Option<&str>) -> Result<Self, QueryError> {
        if kind == QueryKind::All {
            return Ok(SolarDataQuery::All);
        }

        let date = date
            .filter(|d| !d.trim().is_empty())
            .ok_or_else(|| QueryError::InvalidInput(format!("{} query requires a date", kind)))?;
        let date = parse_date(date)?;

        Ok(match kind {
            QueryKind::All => SolarDataQuery::All,
            QueryKind::ByDate => SolarDataQuery::ByDate(date),
            QueryKind::ByMonth => SolarDataQuery::ByMonth(date),
            QueryKind::ByYear => SolarDataQuery::ByYear(date),
        })
    }

    /// Build a query from a kind name and an optional date string.
    pub fn parse(kind: &str, date: Option<&str>) -> Result<Self, QueryError> {
        Self::new(kind.parse()?, date)
    }
}

/// Parse a calendar date, discarding any time-of-day component.
///
/// Accepts `2023-01-15`, `2023-01-15T08:30:00` (with optional fractional
/// seconds) and RFC 3339 timestamps.
pub fn parse_date(input: &str) -> Result<NaiveDate, QueryError> {
    let input = input.trim();
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(datetime) = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(datetime.date());
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(input) {
        return Ok(datetime.date_naive());
    }
    Err(QueryError::InvalidInput(format!(
        "cannot parse date: {:?}",
        input
    )))
}
