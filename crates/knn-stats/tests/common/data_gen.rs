//! Data generation utilities for testing.

use knn_stats::{neighbors::AdjacencyList, BinaryVector, DenseVector, FlatVec};
use rand::{rngs::StdRng, Rng, SeedableRng};

/// A handful of points on the diagonal, with one far away.
pub fn tiny() -> FlatVec<DenseVector> {
    let points = [[0.0, 0.0], [1.0, 1.0], [2.0, 2.0], [3.0, 3.0], [10.0, 10.0]];
    FlatVec::new(points.iter().map(|p| DenseVector::new(p.to_vec())).collect()).unwrap()
}

/// Points drawn uniformly from the unit cube.
pub fn uniform(car: usize, dim: usize, seed: u64) -> FlatVec<DenseVector> {
    let mut rng = StdRng::seed_from_u64(seed);
    let points = (0..car)
        .map(|_| DenseVector::new((0..dim).map(|_| rng.gen::<f64>()).collect()))
        .collect();
    FlatVec::new(points).unwrap()
}

/// Points drawn uniformly from small cubes of side `spread` around each of
/// the `centers`, in turn.
pub fn blobs(centers: &[Vec<f64>], per_center: usize, spread: f64, seed: u64) -> FlatVec<DenseVector> {
    let mut rng = StdRng::seed_from_u64(seed);
    let points = (0..per_center)
        .flat_map(|_| centers.iter())
        .map(|c| DenseVector::new(c.iter().map(|&x| x + spread * (rng.gen::<f64>() - 0.5)).collect()))
        .collect::<Vec<_>>();
    FlatVec::new(points).unwrap()
}

/// The corners of a `dim`-dimensional cube, with a few tight blobs.
pub fn corner_blobs(dim: usize, per_center: usize, seed: u64) -> FlatVec<DenseVector> {
    let centers = vec![vec![0.0; dim], vec![1.0; dim], (0..dim).map(|d| (d % 2) as f64).collect()];
    blobs(&centers, per_center, 1e-3, seed)
}

/// Random binary vectors, each dimension set with probability `density`.
pub fn binary(car: usize, dim: usize, density: f64, seed: u64) -> FlatVec<BinaryVector> {
    let mut rng = StdRng::seed_from_u64(seed);
    let points = (0..car)
        .map(|_| {
            let bits = (0..dim).map(|_| rng.gen_bool(density)).collect::<Vec<_>>();
            BinaryVector::from_bits(&bits)
        })
        .collect();
    FlatVec::new(points).unwrap()
}

/// Binary vectors that are small perturbations of a few prototypes.
pub fn binary_clusters(prototypes: usize, per_prototype: usize, dim: usize, seed: u64) -> FlatVec<BinaryVector> {
    let mut rng = StdRng::seed_from_u64(seed);
    let prototypes = (0..prototypes)
        .map(|_| (0..dim).map(|_| rng.gen_bool(0.5)).collect::<Vec<_>>())
        .collect::<Vec<_>>();
    let points = (0..per_prototype)
        .flat_map(|_| prototypes.iter())
        .map(|p| {
            let bits = p.iter().map(|&b| if rng.gen_bool(0.02) { !b } else { b }).collect::<Vec<_>>();
            BinaryVector::from_bits(&bits)
        })
        .collect();
    FlatVec::new(points).unwrap()
}

/// One-dimensional attributes, one per point.
pub fn attributes(values: &[f64]) -> FlatVec<DenseVector> {
    FlatVec::new(values.iter().map(|&x| DenseVector::new(vec![x])).collect()).unwrap()
}

/// Symmetric neighbor sets of a path `0 - 1 - ... - (n - 1)`.
pub fn chain(n: usize) -> AdjacencyList<usize> {
    AdjacencyList::from_edges((1..n).map(|i| (i - 1, i)), true)
}
