//! Neighbor sets made of the k nearest points in the spatial attributes.

use std::collections::HashMap;

use rayon::prelude::*;

use super::NeighborSets;
use crate::core::{Dataset, KnnQuery, PointId, Result, StatsError, Vector};

/// Neighbor sets made of the `k` nearest points of each point, precomputed
/// through a kNN query over the spatial attributes.
///
/// Each point is its own nearest neighbor, so every set contains the point
/// itself and at most `k - 1` others.
#[derive(Debug, Clone)]
pub struct KNearestNeighborhood<Id: PointId> {
    /// The neighbors of each point, nearest first.
    lists: HashMap<Id, Vec<Id>>,
    /// The number of neighbors per point.
    k: usize,
}

impl<Id: PointId> KNearestNeighborhood<Id> {
    /// Precomputes the `k` nearest neighbors of every point in `data`.
    ///
    /// # Errors
    ///
    /// * If `k` is zero.
    /// * If any kNN query fails.
    pub fn new<V, D, Q>(data: &D, knn: &Q, k: usize) -> Result<Self>
    where
        V: Vector,
        D: Dataset<V, Id = Id>,
        Q: KnnQuery<V, Id = Id>,
    {
        Self::check_k(k)?;
        let lists = data
            .ids()
            .into_iter()
            .map(|id| Self::query(knn, id, k))
            .collect::<Result<_>>()?;
        ftlog::debug!("Precomputed {k}-nearest spatial neighborhoods for {} points.", data.cardinality());
        Ok(Self { lists, k })
    }

    /// Parallel version of [`KNearestNeighborhood::new`].
    ///
    /// # Errors
    ///
    /// See [`KNearestNeighborhood::new`].
    pub fn par_new<V, D, Q>(data: &D, knn: &Q, k: usize) -> Result<Self>
    where
        V: Vector,
        D: Dataset<V, Id = Id>,
        Q: KnnQuery<V, Id = Id> + Sync,
    {
        Self::check_k(k)?;
        let lists = data
            .ids()
            .into_par_iter()
            .map(|id| Self::query(knn, id, k))
            .collect::<Result<_>>()?;
        ftlog::debug!("Precomputed {k}-nearest spatial neighborhoods for {} points.", data.cardinality());
        Ok(Self { lists, k })
    }

    /// Returns the number of neighbors per point.
    #[must_use]
    pub const fn k(&self) -> usize {
        self.k
    }

    /// Rejects a neighborhood size of zero.
    fn check_k(k: usize) -> Result<()> {
        if k == 0 {
            Err(StatsError::InvalidParameter("k must be at least 1".to_string()))
        } else {
            Ok(())
        }
    }

    /// Returns the identifiers of the `k` nearest neighbors of `id`.
    fn query<V: Vector, Q: KnnQuery<V, Id = Id>>(knn: &Q, id: Id, k: usize) -> Result<(Id, Vec<Id>)> {
        let neighbors = knn.knn_by_id(id, k)?.into_iter().map(|n| n.id).collect();
        Ok((id, neighbors))
    }
}

impl<Id: PointId> NeighborSets for KNearestNeighborhood<Id> {
    type Id = Id;

    fn neighbors_of(&self, id: Id) -> Result<Vec<Id>> {
        self.lists
            .get(&id)
            .cloned()
            .ok_or_else(|| StatsError::UnknownPoint(format!("{id:?} has no precomputed neighborhood")))
    }
}
