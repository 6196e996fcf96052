mod common;

use common::{add, assert_close, id_set, ids, seed_docs, setup};
use vecstore::domain::error::DomainError;
use vecstore::domain::values::vector::Vector;

#[test]
fn test_ranked_search_example() {
    let (_dir, store) = setup();
    seed_docs(&store);

    let results = store.search(&[1.0, 0.0, 0.0], 2).unwrap();
    assert_eq!(ids(&results), vec!["doc1", "doc2"]);
    assert_close(results[0].score, 1.0);
    assert!((results[1].score - 0.994).abs() < 1e-3);
}

#[test]
fn test_search_empty_store() {
    let (_dir, store) = setup();
    let results = store.search(&[1.0, 2.0], 3).unwrap();
    assert!(results.is_empty());
}

#[test]
fn test_limit_larger_than_candidates_returns_all_sorted() {
    let (_dir, store) = setup();
    seed_docs(&store);

    let results = store.search(&[1.0, 0.0, 0.0], 50).unwrap();
    assert_eq!(ids(&results), vec!["doc1", "doc2", "doc3"]);
    assert!(results.windows(2).all(|w| w[0].score >= w[1].score));
    assert_close(results[2].score, -1.0);
}

#[test]
fn test_limit_zero_returns_nothing() {
    let (_dir, store) = setup();
    seed_docs(&store);
    assert!(store.search(&[1.0, 0.0, 0.0], 0).unwrap().is_empty());
}

#[test]
fn test_dimension_mismatch_entries_are_skipped() {
    let (_dir, store) = setup();
    seed_docs(&store);
    add(&store, "short", &[1.0, 0.0]);
    add(&store, "long", &[1.0, 0.0, 0.0, 0.0]);

    let results = store.search(&[1.0, 0.0, 0.0], 10).unwrap();
    assert_eq!(ids(&results), vec!["doc1", "doc2", "doc3"]);
}

#[test]
fn test_zero_vector_entries_are_skipped() {
    let (_dir, store) = setup();
    seed_docs(&store);
    add(&store, "zero", &[0.0, 0.0, 0.0]);

    let results = store.search(&[1.0, 0.0, 0.0], 10).unwrap();
    assert!(!ids(&results).contains(&"zero"));
    assert_eq!(results.len(), 3);
}

#[test]
fn test_zero_query_matches_nothing() {
    let (_dir, store) = setup();
    seed_docs(&store);
    let results = store.search(&[0.0, 0.0, 0.0], 10).unwrap();
    assert!(results.is_empty());
}

#[test]
fn test_every_candidate_invalid_is_empty_not_error() {
    let (_dir, store) = setup();
    add(&store, "a", &[1.0, 2.0]);
    add(&store, "b", &[0.0, 0.0, 0.0]);
    assert!(store.search(&[1.0, 2.0, 3.0], 5).unwrap().is_empty());
}

#[test]
fn test_equal_scores_compared_as_set() {
    let (_dir, store) = setup();
    add(&store, "x", &[2.0, 0.0]);
    add(&store, "y", &[5.0, 0.0]);
    add(&store, "z", &[0.0, 1.0]);

    let results = store.search(&[1.0, 0.0], 2).unwrap();
    let expected = ["x", "y"].iter().map(|s| s.to_string()).collect();
    assert_eq!(id_set(&results), expected);
    for r in &results {
        assert_close(r.score, 1.0);
    }
}

#[test]
fn test_empty_query_rejected() {
    let (_dir, store) = setup();
    seed_docs(&store);
    let err = store.search(&[], 3).unwrap_err();
    assert!(matches!(err, DomainError::InvalidInput(_)));
}

#[test]
fn test_overwrite_keeps_latest_value() {
    let (_dir, store) = setup();
    add(&store, "a", &[1.0, 0.0]);
    add(&store, "a", &[0.0, 1.0]);

    assert_eq!(store.len(), 1);
    let stored = store.engine().get("a").unwrap();
    assert_eq!(&*stored, &[0.0, 1.0]);

    let results = store.search(&[0.0, 1.0], 3).unwrap();
    assert_eq!(ids(&results), vec!["a"]);
    assert_close(results[0].score, 1.0);
}

#[test]
fn test_overwrite_may_change_dimension() {
    let (_dir, store) = setup();
    add(&store, "a", &[1.0, 0.0]);
    add(&store, "a", &[1.0, 0.0, 0.0]);

    assert!(store.search(&[1.0, 0.0], 3).unwrap().is_empty());
    assert_eq!(store.search(&[1.0, 0.0, 0.0], 3).unwrap().len(), 1);
}

#[test]
fn test_add_rejects_empty_id_and_vector() {
    let (_dir, store) = setup();
    let err = store
        .add(String::new(), Vector::new(vec![1.0]))
        .unwrap_err();
    assert!(matches!(err, DomainError::InvalidInput(_)));

    let err = store.add("a".into(), Vector::new(Vec::new())).unwrap_err();
    assert!(matches!(err, DomainError::InvalidInput(_)));
    assert!(store.is_empty());
}

#[test]
fn test_stats_dimension_histogram() {
    let (_dir, store) = setup();
    seed_docs(&store);
    add(&store, "short", &[1.0, 0.0]);

    let stats = store.stats();
    assert_eq!(stats.entries, 4);
    assert_eq!(stats.dimensions.get(&3), Some(&3));
    assert_eq!(stats.dimensions.get(&2), Some(&1));
}

#[test]
fn test_huge_components_rank_correctly() {
    let (_dir, store) = setup();
    add(&store, "parallel_big", &[1e200, 1e200]);
    add(&store, "opposite", &[-1.0, -1.0]);

    let results = store.search(&[1e200, 1e200], 3).unwrap();
    assert_eq!(ids(&results), vec!["parallel_big", "opposite"]);
    assert!(results.iter().all(|r| r.score.is_finite()));
    assert!((results[0].score - 1.0).abs() < 1e-12);
    assert!((results[1].score + 1.0).abs() < 1e-12);

    let results = store.search(&[1.0, 1.0], 1).unwrap();
    assert_eq!(ids(&results), vec!["parallel_big"]);
    assert!((results[0].score - 1.0).abs() < 1e-12);
}

#[test]
fn test_tiny_components_are_still_candidates() {
    let (_dir, store) = setup();
    add(&store, "tiny", &[1e-200, 0.0]);

    let results = store.search(&[1.0, 0.0], 3).unwrap();
    assert_eq!(ids(&results), vec!["tiny"]);
    assert!((results[0].score - 1.0).abs() < 1e-12);
}
