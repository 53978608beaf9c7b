#![doc = include_str!("../README.md")]

mod core;
pub mod hopkins;
pub mod slom;
pub mod utils;

pub use core::{
    dataset, knn, metric, neighbors, BinaryVector, Dataset, DenseVector, FlatVec, KnnQuery, LinearKnn, Metric, MinMax,
    Neighbor, NeighborSets, OutlierResult, PointId, RandomFactory, Result, ScoreMeta, ScoreStore, SizedHeap, StatsError,
    Vector,
};
pub use hopkins::{Hopkins, HopkinsParams, HopkinsResult};
pub use slom::{Slom, SlomResult};

/// The current version of the crate.
pub const VERSION: &str = "0.1.0";
