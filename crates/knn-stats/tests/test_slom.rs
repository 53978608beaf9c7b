//! Tests for the Spatial Local Outlier Measure.

use float_cmp::approx_eq;
use knn_stats::{
    metric::{Euclidean, Manhattan},
    neighbors::{AdjacencyList, ExtendedNeighborhood, KNearestNeighborhood},
    slom::{modified_distance, slom_score},
    DenseVector, FlatVec, LinearKnn, NeighborSets, Result, Slom, StatsError,
};
use test_case::test_case;

mod common;

#[test_case(&[2.0, 4.0], 2.0; "two neighbors")]
#[test_case(&[], 0.0; "no neighbors")]
#[test_case(&[3.0], 3.0; "one neighbor")]
#[test_case(&[1.0, 5.0, 3.0], 2.0; "three neighbors")]
#[test_case(&[7.0, 7.0, 7.0, 7.0], 7.0; "equal distances")]
fn modified_distances(distances: &[f64], expected: f64) {
    assert!(approx_eq!(f64, modified_distance(distances), expected, ulps = 2));
}

#[test_case(2, 0.5; "two neighbors")]
#[test_case(3, 0.25; "three neighbors")]
fn balanced_neighborhood(cnt: usize, expected: f64) {
    // Every vote is a tie, so the asymmetry factor is 1 / (cnt - 1) before the
    // division by 1 + avg = 2.
    let neighbors = vec![1.0; cnt];
    assert!(approx_eq!(f64, slom_score(1.0, &neighbors), expected, ulps = 2));
}

#[test]
fn small_neighborhoods() {
    assert_eq!(slom_score(4.0, &[]), 0.0);

    // With one neighbor the asymmetry factor is 1: 1 / (1 + 1) * 4.
    assert_eq!(slom_score(4.0, &[1.0]), 2.0);
}

#[test]
fn line() {
    let data = common::data_gen::attributes(&[1.0, 1.0, 1.0, 1.0, 10.0]);
    let chain = common::data_gen::chain(5);

    let result = Slom::new(Euclidean).run(&data, &chain).unwrap();

    let modified = result.modified.into_vec();
    assert_eq!(modified, vec![(0, 0.0), (1, 0.0), (2, 0.0), (3, 0.0), (4, 9.0)]);

    let scores = result.outliers.scores.iter().collect::<Vec<_>>();
    assert_eq!(scores, vec![(0, 0.0), (1, 0.0), (2, 0.0), (3, 0.0), (4, 9.0)]);

    let meta = result.outliers.meta;
    assert_eq!(meta.actual_min, 0.0);
    assert_eq!(meta.actual_max, 9.0);
    assert_eq!(meta.theoretical_min, 0.0);
    assert_eq!(meta.theoretical_max, f64::INFINITY);
    assert_eq!(meta.normalize(9.0), 1.0);
}

#[test]
fn isolated_points() {
    let data = common::data_gen::attributes(&[1.0, 2.0, 30.0]);
    let sets = AdjacencyList::from_lists([(0, vec![1]), (1, vec![0])]);

    let result = Slom::new(Euclidean).run(&data, &sets).unwrap();
    assert_eq!(result.modified.get(2), Some(0.0));
    assert_eq!(result.outliers.scores.get(2), Some(0.0));

    // One neighbor each: the modified distance is the distance itself, and
    // the score is 1 / (1 + 1) * 1.
    assert_eq!(result.modified.get(0), Some(1.0));
    assert_eq!(result.outliers.scores.get(0), Some(0.5));
}

#[test]
fn self_inclusion() {
    let data = common::data_gen::uniform(40, 3, 8);
    let chain = common::data_gen::chain(40);
    let with_self = AdjacencyList::from_lists((0..40).map(|i| {
        let mut list = chain.neighbors_of(i).unwrap();
        list.insert(list.len() / 2, i);
        (i, list)
    }));

    let slom = Slom::new(Manhattan);
    let a = slom.run(&data, &chain).unwrap();
    let b = slom.run(&data, &with_self).unwrap();

    assert_eq!(a.modified.into_vec(), b.modified.into_vec());
    assert_eq!(a.outliers.scores.into_vec(), b.outliers.scores.into_vec());
}

#[test]
fn deterministic() {
    let data = common::data_gen::uniform(200, 4, 3);
    let chain = common::data_gen::chain(200);
    let sets = ExtendedNeighborhood::new(&chain, 3).unwrap();
    let slom = Slom::new(Euclidean);

    let a = slom.run(&data, &sets).unwrap();
    let b = slom.run(&data, &sets).unwrap();
    let c = slom.par_run(&data, &sets).unwrap();

    let a_scores = a.outliers.scores.into_vec();
    assert_eq!(a_scores, b.outliers.scores.into_vec());
    assert_eq!(a_scores, c.outliers.scores.into_vec());
    assert_eq!(a.modified.into_vec(), c.modified.into_vec());
    assert_eq!(a.outliers.meta, c.outliers.meta);
}

#[test]
fn spatial_knn_neighborhoods() {
    // The spatial attributes are a grid, the non-spatial ones are random with
    // one planted outlier.
    let side = 10;
    let spatial = FlatVec::new(
        (0..side * side)
            .map(|i| DenseVector::new(vec![(i / side) as f64, (i % side) as f64]))
            .collect(),
    )
    .unwrap();
    let mut attributes = common::data_gen::uniform(side * side, 2, 5).vectors().to_vec();
    attributes[55] = DenseVector::new(vec![50.0, 50.0]);
    let attributes = FlatVec::new(attributes).unwrap();

    let knn = LinearKnn::new(&spatial, Euclidean);
    let sets = KNearestNeighborhood::par_new(&spatial, &knn, 5).unwrap();

    let result = Slom::new(Euclidean).par_run(&attributes, &sets).unwrap();
    let scores = result.outliers.scores.iter().collect::<Vec<_>>();
    assert!(scores.iter().all(|&(_, s)| s >= 0.0 && s.is_finite()));
    assert!(result.modified.iter().all(|(_, d)| d >= 0.0));

    let (top, _) = scores
        .iter()
        .copied()
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .unwrap();
    assert_eq!(top, 55);
    assert_eq!(result.outliers.meta.actual_max, result.outliers.scores.get(55).unwrap());
}

#[test]
fn custom_identifiers() {
    let data = FlatVec::with_ids(
        vec!["north", "south", "east", "west"],
        vec![
            DenseVector::new(vec![1.0]),
            DenseVector::new(vec![1.5]),
            DenseVector::new(vec![1.2]),
            DenseVector::new(vec![8.0]),
        ],
    )
    .unwrap();
    let sets = AdjacencyList::from_edges(
        [("north", "east"), ("east", "south"), ("south", "west"), ("west", "north")],
        true,
    );

    let result = Slom::new(Euclidean).run(&data, &sets).unwrap();
    assert_eq!(result.outliers.scores.len(), 4);
    let west = result.outliers.scores.get("west").unwrap();
    assert!(result.outliers.scores.iter().all(|(_, s)| s <= west));
}

#[test]
fn unknown_neighbor() {
    let data = common::data_gen::attributes(&[1.0, 2.0]);
    let sets = AdjacencyList::from_lists([(0, vec![1, 7])]);

    assert!(matches!(
        Slom::new(Euclidean).run(&data, &sets),
        Err(StatsError::UnknownPoint(_))
    ));
}

#[test_case(f64::NAN; "nan")]
#[test_case(f64::NEG_INFINITY; "infinite")]
#[test_case(-2.0; "negative")]
fn degenerate_distances(distance: f64) {
    let data = common::data_gen::attributes(&[1.0, 2.0, 3.0]);
    let chain = common::data_gen::chain(3);

    let slom = Slom::new(common::Constant(distance));
    assert!(matches!(slom.run(&data, &chain), Err(StatsError::NumericDegeneracy(_))));
    assert!(matches!(slom.par_run(&data, &chain), Err(StatsError::NumericDegeneracy(_))));
}

/// A neighbor-set service whose backing store is down.
struct Offline;

impl NeighborSets for Offline {
    type Id = usize;

    fn neighbors_of(&self, id: usize) -> Result<Vec<usize>> {
        Err(StatsError::Query(format!("no connection while fetching {id}")))
    }
}

#[test]
fn query_failures_propagate() {
    let data = common::data_gen::attributes(&[1.0, 2.0]);
    assert!(matches!(
        Slom::new(Euclidean).run(&data, &Offline),
        Err(StatsError::Query(_))
    ));
    assert!(matches!(
        Slom::new(Euclidean).par_run(&data, &Offline),
        Err(StatsError::Query(_))
    ));
}
