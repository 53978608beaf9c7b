//! The k-nearest-neighbor query contract and a reference implementation.

mod linear;
mod sized_heap;

pub use linear::LinearKnn;
pub use sized_heap::SizedHeap;

use core::cmp::Ordering;

use super::{PointId, Result, StatsError, Vector};

/// A point returned by a kNN query, with its distance to the query.
///
/// Neighbors are ordered by distance, with ties broken by identifier.
#[derive(Debug, Clone, Copy)]
pub struct Neighbor<Id> {
    /// The identifier of the neighbor.
    pub id: Id,
    /// The distance from the query to the neighbor.
    pub distance: f64,
}

impl<Id: PointId> PartialEq for Neighbor<Id> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<Id: PointId> Eq for Neighbor<Id> {}

impl<Id: PointId> PartialOrd for Neighbor<Id> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<Id: PointId> Ord for Neighbor<Id> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then_with(|| self.id.cmp(&other.id))
    }
}

/// The k-nearest-neighbor query service consumed by the Hopkins statistic and
/// by the k-nearest spatial neighborhoods.
///
/// Implementors may be backed by any index or storage engine. Failures of the
/// underlying service should be reported as [`StatsError::Query`] and are
/// propagated unchanged by the algorithms.
pub trait KnnQuery<V: Vector> {
    /// The type of the identifiers of the indexed points.
    type Id: PointId;

    /// Returns the `min(k, n)` nearest indexed points to `query`, in ascending
    /// order of distance.
    ///
    /// The query need not be one of the indexed points. Ties must be broken
    /// deterministically.
    ///
    /// # Errors
    ///
    /// * If `k` is zero.
    /// * If the dimensionality of `query` differs from that of the index.
    fn knn(&self, query: &V, k: usize) -> Result<Vec<Neighbor<Self::Id>>>;

    /// Returns the `min(k, n)` nearest indexed points to the indexed point
    /// `id`, in ascending order of distance.
    ///
    /// The point itself is part of the result.
    ///
    /// # Errors
    ///
    /// * If `k` is zero.
    /// * If `id` is not indexed.
    fn knn_by_id(&self, id: Self::Id, k: usize) -> Result<Vec<Neighbor<Self::Id>>>;

    /// Whether `id` is one of the indexed points.
    fn contains(&self, id: Self::Id) -> bool;

    /// Returns the distance from `query` to its `k`-th nearest indexed point.
    ///
    /// If fewer than `k` points are indexed, this is the distance to the
    /// farthest one.
    ///
    /// # Errors
    ///
    /// See [`KnnQuery::knn`].
    fn k_distance(&self, query: &V, k: usize) -> Result<f64> {
        last_distance(&self.knn(query, k)?, k)
    }

    /// Returns the distance from the indexed point `id` to its `k`-th nearest
    /// indexed point, counting itself.
    ///
    /// # Errors
    ///
    /// See [`KnnQuery::knn_by_id`].
    fn k_distance_by_id(&self, id: Self::Id, k: usize) -> Result<f64> {
        last_distance(&self.knn_by_id(id, k)?, k)
    }
}

/// Returns the distance of the last neighbor in an ascending kNN result.
fn last_distance<Id>(neighbors: &[Neighbor<Id>], k: usize) -> Result<f64> {
    neighbors
        .last()
        .map(|n| n.distance)
        .ok_or(StatsError::InsufficientData {
            requested: k,
            available: 0,
        })
}
