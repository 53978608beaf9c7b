//! Tests for the kNN query service.

use knn_stats::{
    metric::{Euclidean, Manhattan},
    DenseVector, FlatVec, KnnQuery, LinearKnn, Metric, StatsError,
};
use test_case::test_case;

mod common;

#[test]
fn tiny() {
    let data = common::data_gen::tiny();
    let knn = LinearKnn::new(&data, Euclidean);

    // Points 0 and 1 are both at distance 1; ties are broken by identifier.
    let query = DenseVector::new(vec![0.0, 1.0]);
    let hits = knn.knn(&query, 2).unwrap();
    assert_eq!(hits.iter().map(|n| n.id).collect::<Vec<_>>(), vec![0, 1]);
    assert_eq!(hits[0].distance, 1.0);
    assert_eq!(hits[1].distance, 1.0);

    // Asking for more neighbors than points returns every point.
    let hits = knn.knn(&query, 10).unwrap();
    assert_eq!(hits.len(), 5);
    assert_eq!(hits.last().map(|n| n.id), Some(4));

    // An indexed point is its own nearest neighbor.
    let hits = knn.knn_by_id(2, 3).unwrap();
    assert_eq!(hits.iter().map(|n| n.id).collect::<Vec<_>>(), vec![2, 1, 3]);
    assert_eq!(hits[0].distance, 0.0);

    assert_eq!(knn.k_distance_by_id(0, 1).unwrap(), 0.0);
    assert_eq!(knn.k_distance_by_id(0, 2).unwrap(), 2_f64.sqrt());
    assert_eq!(knn.k_distance(&DenseVector::new(vec![10.0, 11.0]), 1).unwrap(), 1.0);
}

#[test_case(100, 2, 1; "100x2 k1")]
#[test_case(200, 5, 7; "200x5 k7")]
#[test_case(50, 10, 60; "50x10 k60")]
fn linear_matches_brute_force(car: usize, dim: usize, k: usize) {
    let data = common::data_gen::uniform(car, dim, 42);
    let queries = common::data_gen::uniform(10, dim, 7);

    let seq = LinearKnn::new(&data, Manhattan);
    let par = LinearKnn::new(&data, Manhattan).with_parallelism(true);

    for (_, query) in queries.iter() {
        let mut expected = data
            .iter()
            .map(|(id, v)| (Manhattan.distance(query, v), id))
            .collect::<Vec<_>>();
        expected.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));
        expected.truncate(k);

        let hits = seq.knn(query, k).unwrap();
        assert_eq!(hits.len(), k.min(car));
        assert!(hits.windows(2).all(|w| w[0].distance <= w[1].distance));
        assert_eq!(
            hits.iter().map(|n| (n.distance, n.id)).collect::<Vec<_>>(),
            expected
        );

        assert_eq!(par.knn(query, k).unwrap(), hits);
    }
}

#[test]
fn invalid_queries() {
    let data = common::data_gen::tiny();
    let knn = LinearKnn::new(&data, Euclidean);
    let query = DenseVector::new(vec![0.0, 1.0]);

    assert!(matches!(knn.knn(&query, 0), Err(StatsError::InvalidParameter(_))));
    assert!(matches!(
        knn.knn(&DenseVector::new(vec![0.0, 1.0, 2.0]), 1),
        Err(StatsError::IncompatibleDimension { expected: 2, found: 3 })
    ));

    assert!(knn.contains(4));
    assert!(!knn.contains(5));
    assert!(matches!(knn.knn_by_id(5, 1), Err(StatsError::UnknownPoint(_))));
}

#[test]
fn unbounded_k() {
    let data = common::data_gen::uniform(10, 3, 4);
    let query = DenseVector::new(vec![0.5; 3]);

    for parallel in [false, true] {
        let knn = LinearKnn::new(&data, Euclidean).with_parallelism(parallel);

        let hits = knn.knn(&query, usize::MAX).unwrap();
        assert_eq!(hits.len(), 10);
        assert!(hits.windows(2).all(|w| w[0].distance <= w[1].distance));

        let hits = knn.knn_by_id(3, usize::MAX / 32).unwrap();
        assert_eq!(hits.len(), 10);
        assert_eq!(hits[0].id, 3);

        let farthest = knn.knn(&query, 10).unwrap()[9].distance;
        assert_eq!(knn.k_distance(&query, usize::MAX).unwrap(), farthest);
    }
}

#[test_case(f64::NAN; "nan")]
#[test_case(f64::INFINITY; "infinite")]
#[test_case(-1.0; "negative")]
fn degenerate_distances(distance: f64) {
    let data = common::data_gen::tiny();
    let query = DenseVector::new(vec![0.0, 1.0]);

    for parallel in [false, true] {
        let knn = LinearKnn::new(&data, common::Constant(distance)).with_parallelism(parallel);
        assert!(matches!(knn.knn(&query, 2), Err(StatsError::NumericDegeneracy(_))));
        assert!(matches!(knn.knn_by_id(0, 2), Err(StatsError::NumericDegeneracy(_))));
    }
}

#[test]
fn custom_identifiers() {
    let data = FlatVec::with_ids(
        vec!["c", "a", "b"],
        vec![
            DenseVector::new(vec![0.0]),
            DenseVector::new(vec![1.0]),
            DenseVector::new(vec![3.0]),
        ],
    )
    .unwrap();
    let knn = LinearKnn::new(&data, Euclidean);

    let hits = knn.knn_by_id("a", 3).unwrap();
    assert_eq!(hits.iter().map(|n| n.id).collect::<Vec<_>>(), vec!["a", "c", "b"]);
    assert!(!knn.contains("d"));
}
