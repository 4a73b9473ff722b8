//! Shared fixtures: the four-record scenario and helpers.

use solar_share::{InMemorySolarDataStore, NaiveDate, SolarData};

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn ids(records: &[SolarData]) -> Vec<i64> {
    records.iter().map(|r| r.id).collect()
}

/// 2023-01-15 (1), 2023-01-20 (2), 2023-02-01 (3), 2024-01-15 (4).
pub fn scenario_records() -> Vec<SolarData> {
    vec![
        SolarData::new(1, day(2023, 1, 15), 14.2),
        SolarData::new(2, day(2023, 1, 20), 9.8),
        SolarData::new(3, day(2023, 2, 1), 11.1),
        SolarData::new(4, day(2024, 1, 15), 15.0),
    ]
}

pub fn scenario_store() -> InMemorySolarDataStore {
    InMemorySolarDataStore::from_records(scenario_records()).unwrap()
}

/// A year of daily records starting 2022-11-01, ids counting up from 1.
pub fn daily_records() -> Vec<SolarData> {
    let start = day(2022, 11, 1);
    start
        .iter_days()
        .take(400)
        .enumerate()
        .map(|(i, date)| SolarData::new(i as i64 + 1, date, (i % 17) as f64 * 1.5))
        .collect()
}
