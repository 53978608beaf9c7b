//! The core traits and structs: vectors, metrics, datasets, and the query
//! services consumed by the algorithms.

pub mod dataset;
mod error;
pub mod knn;
pub mod metric;
pub mod neighbors;
mod random;
mod scores;
mod vector;

pub use dataset::{Dataset, FlatVec, PointId};
pub use error::{Result, StatsError};
pub use knn::{KnnQuery, LinearKnn, Neighbor, SizedHeap};
pub use metric::Metric;
pub use neighbors::{AdjacencyList, ExtendedNeighborhood, KNearestNeighborhood, NeighborSets};
pub use random::RandomFactory;
pub use scores::{MinMax, OutlierResult, ScoreMeta, ScoreStore};
pub use vector::{BinaryVector, DenseVector, Vector};

pub(crate) use error::{check_dim, finite};
