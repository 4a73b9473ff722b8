//! Matching semantics of the in-memory store.

use std::sync::Arc;
use std::thread;

use chrono::Datelike;
use solar_share::{InMemorySolarDataStore, SolarDataStore};

use crate::support::{daily_records, day, ids, scenario_store};

#[test]
fn scenario_lookups() {
    let store = scenario_store();

    assert_eq!(store.get_by_date(day(2023, 1, 15)).unwrap().map(|r| r.id), Some(1));
    assert_eq!(store.get_by_date(day(2023, 3, 1)).unwrap(), None);
    assert_eq!(ids(&store.get_by_month(day(2023, 1, 1)).unwrap()), vec![1, 2]);
    assert_eq!(ids(&store.get_by_year(day(2023, 7, 4)).unwrap()), vec![1, 2, 3]);
    assert!(store.get_by_year(day(2025, 1, 1)).unwrap().is_empty());
    assert_eq!(ids(&store.get_all().unwrap()), vec![1, 2, 3, 4]);
}

#[test]
fn every_record_is_found_by_its_date() {
    let records = daily_records();
    let store = InMemorySolarDataStore::from_records(records.clone()).unwrap();

    for record in &records {
        let found = store.get_by_date(record.date).unwrap().unwrap();
        assert_eq!(found.id, record.id, "date {}", record.date);
    }
}

#[test]
fn month_lookup_returns_exactly_that_month() {
    let records = daily_records();
    let store = InMemorySolarDataStore::from_records(records.clone()).unwrap();

    for probe in [day(2022, 11, 30), day(2023, 2, 1), day(2023, 2, 28), day(2023, 12, 7)] {
        let expected: Vec<i64> = records
            .iter()
            .filter(|r| r.date.year() == probe.year() && r.date.month() == probe.month())
            .map(|r| r.id)
            .collect();
        let actual = store.get_by_month(probe).unwrap();
        assert!(!expected.is_empty());
        assert_eq!(ids(&actual), expected, "month of {}", probe);
    }
}

#[test]
fn year_lookup_returns_exactly_that_year() {
    let records = daily_records();
    let store = InMemorySolarDataStore::from_records(records.clone()).unwrap();

    for year in [2022, 2023] {
        let expected: Vec<i64> = records
            .iter()
            .filter(|r| r.date.year() == year)
            .map(|r| r.id)
            .collect();
        let actual = store.get_by_year(day(year, 6, 15)).unwrap();
        assert_eq!(ids(&actual), expected, "year {}", year);
    }
    assert!(store.get_by_year(day(2021, 1, 1)).unwrap().is_empty());
}

#[test]
fn repeated_queries_are_identical() {
    let store = scenario_store();
    let probe = day(2023, 1, 20);

    assert_eq!(store.get_all().unwrap(), store.get_all().unwrap());
    assert_eq!(store.get_by_date(probe).unwrap(), store.get_by_date(probe).unwrap());
    assert_eq!(store.get_by_month(probe).unwrap(), store.get_by_month(probe).unwrap());
    assert_eq!(store.get_by_year(probe).unwrap(), store.get_by_year(probe).unwrap());
}

#[test]
fn concurrent_readers_see_the_same_results() {
    let store = Arc::new(InMemorySolarDataStore::from_records(daily_records()).unwrap());
    let expected = ids(&store.get_by_month(day(2023, 3, 1)).unwrap());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                (0..50)
                    .map(|_| ids(&store.get_by_month(day(2023, 3, 10)).unwrap()))
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        for result in handle.join().unwrap() {
            assert_eq!(result, expected);
        }
    }
}
