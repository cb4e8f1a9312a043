//! Concurrency tests for the point store.

use std::sync::Arc;
use std::thread;

use campus_tracker::{LocationRecord, LocationStore};

#[test]
fn test_concurrent_adds_are_all_kept() {
    let store = Arc::new(LocationStore::new(None));
    let handles: Vec<_> = (0..100)
        .map(|t| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for i in 0..10 {
                    let record = LocationRecord::new(0.0, 0.0)
                        .unwrap()
                        .with_label(format!("{}-{}", t, i));
                    store.add(record);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(store.len(), 1000);
    let snapshot = store.snapshot();
    assert!(snapshot
        .windows(2)
        .all(|w| w[0].created_at() <= w[1].created_at()));
}

#[test]
fn test_concurrent_adds_respect_history_limit() {
    let store = Arc::new(LocationStore::new(Some(50)));
    let handles: Vec<_> = (0..20)
        .map(|_| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for _ in 0..25 {
                    store.add(LocationRecord::new(1.0, 1.0).unwrap());
                    assert!(store.len() <= 50);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(store.len(), 50);
}

#[test]
fn test_snapshots_during_writes_are_consistent() {
    let store = Arc::new(LocationStore::new(None));
    let writer = {
        let store = Arc::clone(&store);
        thread::spawn(move || {
            for _ in 0..500 {
                store.add(LocationRecord::new(2.0, 2.0).unwrap());
            }
        })
    };

    let mut last_len = 0;
    while !writer.is_finished() {
        let snapshot = store.snapshot();
        assert!(snapshot.len() >= last_len);
        last_len = snapshot.len();
    }
    writer.join().unwrap();
    assert_eq!(store.snapshot().len(), 500);
}
