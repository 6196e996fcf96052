//! Shared test helpers.
#![allow(dead_code)]

use std::collections::HashSet;
use tempfile::TempDir;
use vecstore::domain::entities::search_result::SearchResult;
use vecstore::domain::values::vector::Vector;
use vecstore::VecStore;

/// A store whose data file lives in a fresh temp dir. Keep the `TempDir`
/// alive for as long as the store is used.
pub fn setup() -> (TempDir, VecStore) {
    let dir = tempfile::tempdir().unwrap();
    let store = VecStore::new(dir.path().join("vectors.json"));
    (dir, store)
}

pub fn add(store: &VecStore, id: &str, values: &[f64]) {
    store.add(id.to_string(), Vector::new(values.to_vec())).unwrap();
}

/// doc1 = [1,0,0], doc2 = [0.9,0.1,0], doc3 = [-1,0,0]
pub fn seed_docs(store: &VecStore) {
    add(store, "doc1", &[1.0, 0.0, 0.0]);
    add(store, "doc2", &[0.9, 0.1, 0.0]);
    add(store, "doc3", &[-1.0, 0.0, 0.0]);
}

pub fn ids(results: &[SearchResult]) -> Vec<&str> {
    results.iter().map(|r| r.id.as_str()).collect()
}

pub fn id_set(results: &[SearchResult]) -> HashSet<String> {
    results.iter().map(|r| r.id.clone()).collect()
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
