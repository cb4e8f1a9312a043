use chrono::{DateTime, Duration, TimeZone, Utc};

use super::*;

fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
}

fn record_at(minutes: i64, label: &str) -> LocationRecord {
    LocationRecord::new(3.3415, -76.5295)
        .unwrap()
        .with_label(label)
        .with_created_at(base_time() + Duration::minutes(minutes))
}

fn labels(records: &[LocationRecord]) -> Vec<&str> {
    records.iter().map(LocationRecord::label).collect()
}

#[test]
fn test_new_store_is_empty() {
    let store = LocationStore::default();
    assert!(store.is_empty());
    assert_eq!(store.len(), 0);
    assert!(store.snapshot().is_empty());
    assert_eq!(store.history_limit(), None);
}

#[test]
fn test_snapshot_sorted_by_created_at() {
    let store = LocationStore::new(None);
    store.add(record_at(5, "c"));
    store.add(record_at(0, "a"));
    store.add(record_at(2, "b"));

    assert_eq!(labels(&store.snapshot()), vec!["a", "b", "c"]);
}

#[test]
fn test_snapshot_keeps_insertion_order_for_equal_timestamps() {
    let store = LocationStore::new(None);
    store.add(record_at(1, "first"));
    store.add(record_at(1, "second"));
    store.add(record_at(0, "earlier"));

    assert_eq!(
        labels(&store.snapshot()),
        vec!["earlier", "first", "second"]
    );
}

#[test]
fn test_filter_by_date_start_only() {
    let store = LocationStore::new(None);
    store.bulk_add([record_at(0, "t0"), record_at(1, "t1"), record_at(2, "t2")]);

    let filtered = store.filter_by_date(Some(base_time() + Duration::minutes(1)), None);
    assert_eq!(labels(&filtered), vec!["t1", "t2"]);
}

#[test]
fn test_filter_by_date_bounds_inclusive() {
    let store = LocationStore::new(None);
    store.bulk_add([
        record_at(0, "t0"),
        record_at(1, "t1"),
        record_at(2, "t2"),
        record_at(3, "t3"),
    ]);

    let filtered = store.filter_by_date(
        Some(base_time() + Duration::minutes(1)),
        Some(base_time() + Duration::minutes(2)),
    );
    assert_eq!(labels(&filtered), vec!["t1", "t2"]);
}

#[test]
fn test_filter_by_date_without_bounds_matches_snapshot() {
    let store = LocationStore::new(None);
    store.bulk_add([record_at(3, "x"), record_at(1, "y")]);
    assert_eq!(store.filter_by_date(None, None), store.snapshot());
}

#[test]
fn test_filter_by_date_empty_result() {
    let store = LocationStore::new(None);
    store.add(record_at(0, "t0"));
    let filtered = store.filter_by_date(Some(base_time() + Duration::hours(1)), None);
    assert!(filtered.is_empty());
}

#[test]
fn test_latest_returns_most_recent_oldest_first() {
    let store = LocationStore::new(None);
    for i in 0..5 {
        store.add(record_at(i, &format!("p{}", i)));
    }

    assert_eq!(labels(&store.latest(Some(2))), vec!["p3", "p4"]);
    assert_eq!(store.latest(Some(10)).len(), 5);
    assert!(store.latest(Some(0)).is_empty());
}

#[test]
fn test_latest_on_empty_store() {
    let store = LocationStore::new(None);
    assert!(store.latest(None).is_empty());
}

#[test]
fn test_history_limit_evicts_oldest_by_insertion() {
    let store = LocationStore::new(Some(3));
    for i in 0..5 {
        store.add(record_at(i, &format!("p{}", i)));
    }

    assert_eq!(store.len(), 3);
    assert_eq!(labels(&store.snapshot()), vec!["p2", "p3", "p4"]);
}

#[test]
fn test_history_limit_uses_insertion_order_not_timestamp() {
    // A late-arriving record with an old timestamp is still the newest insert.
    let store = LocationStore::new(Some(2));
    store.add(record_at(10, "new-a"));
    store.add(record_at(11, "new-b"));
    store.add(record_at(0, "backfilled"));

    assert_eq!(labels(&store.snapshot()), vec!["backfilled", "new-b"]);
}

#[test]
fn test_history_limit_zero_keeps_nothing() {
    let store = LocationStore::new(Some(0));
    store.add(record_at(0, "gone"));
    assert!(store.is_empty());
}

#[test]
fn test_clear_then_add_behaves_like_fresh_store() {
    let store = LocationStore::new(Some(2));
    store.bulk_add([record_at(0, "a"), record_at(1, "b")]);
    store.clear();
    assert!(store.snapshot().is_empty());

    store.add(record_at(2, "c"));
    assert_eq!(labels(&store.snapshot()), vec!["c"]);
    assert_eq!(store.history_limit(), Some(2));
}

#[test]
fn test_snapshot_is_a_copy() {
    let store = LocationStore::new(None);
    store.add(record_at(0, "a"));
    let snapshot = store.snapshot();
    store.add(record_at(1, "b"));
    assert_eq!(snapshot.len(), 1);
    assert_eq!(store.len(), 2);
}

#[test]
fn test_latest_defaults_to_ten() {
    let store = LocationStore::new(None);
    for i in 0..12 {
        store.add(record_at(i, &format!("p{}", i)));
    }

    let latest = store.latest(None);
    assert_eq!(latest.len(), 10);
    assert_eq!(latest[0].label(), "p2");
    assert_eq!(latest[9].label(), "p11");
}
