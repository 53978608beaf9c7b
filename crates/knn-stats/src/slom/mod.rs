//! Spatial Local Outlier Measure (SLOM).
//!
//! SLOM scores each point by how far its non-spatial attributes are from
//! those of its spatial neighbors, damped by how unevenly those distances
//! are spread around the neighborhood.
//!
//! The score is computed in two passes. The first pass computes the
//! *modified distance* `D̃(x)` of every point: the mean distance from `x` to
//! its spatial neighbors, excluding the farthest one. The second pass
//! compares `D̃(x)` with the modified distances of the neighbors of `x`.
//! Every modified distance must be known before the second pass starts.
//!
//! # References
//!
//! * S. Chawla and P. Sun, "SLOM: a new measure for local spatial outliers",
//!   Knowledge and Information Systems, 2006.

use std::collections::{HashMap, HashSet};

use rayon::prelude::*;

use crate::core::{
    check_dim, finite, Dataset, Metric, MinMax, NeighborSets, OutlierResult, PointId, Result, ScoreMeta, ScoreStore,
    StatsError, Vector,
};

/// The output of a SLOM run.
#[derive(Debug, Clone)]
pub struct SlomResult<Id: PointId> {
    /// The SLOM score of every point, with their range.
    pub outliers: OutlierResult<Id>,
    /// The modified distance of every point.
    pub modified: ScoreStore<Id>,
}

/// The Spatial Local Outlier Measure.
///
/// # Type Parameters
///
/// * `M` - The metric over the non-spatial attributes.
#[derive(Debug, Clone)]
pub struct Slom<M> {
    /// The metric over the non-spatial attributes.
    metric: M,
}

impl<M> Slom<M> {
    /// Creates a new `Slom`.
    pub const fn new(metric: M) -> Self {
        Self { metric }
    }

    /// Returns the metric.
    pub const fn metric(&self) -> &M {
        &self.metric
    }

    /// Scores every point of `data`, one point after another.
    ///
    /// `data` holds the non-spatial attributes of the points and `neighbors`
    /// their spatial neighborhoods. Each neighbor set is fetched once.
    ///
    /// # Errors
    ///
    /// * If a neighbor is not part of `data`.
    /// * If a point and one of its neighbors have different dimensionalities.
    /// * If a distance, modified distance, or score is not a finite
    ///   non-negative number.
    /// * If the neighbor-set service fails.
    pub fn run<V, D, N>(&self, data: &D, neighbors: &N) -> Result<SlomResult<D::Id>>
    where
        V: Vector,
        M: Metric<V>,
        D: Dataset<V>,
        N: NeighborSets<Id = D::Id>,
    {
        let ids = data.ids();
        ftlog::info!("SLOM ({}): scoring {} points", self.metric.name(), ids.len());

        let sets = ids
            .iter()
            .map(|&id| neighbor_set(neighbors, id))
            .collect::<Result<Vec<_>>>()?;

        let modified = ids
            .iter()
            .zip(&sets)
            .map(|(&id, set)| self.modified_distance_of(data, id, set))
            .collect::<Result<Vec<_>>>()?;
        let modified = ModifiedDistances::new(&ids, modified);

        let scores = ids
            .iter()
            .zip(&sets)
            .map(|(&id, set)| modified.score_of(id, set))
            .collect::<Result<Vec<_>>>()?;

        Self::finish(&ids, &modified, scores)
    }

    /// Parallel version of [`Slom::run`].
    ///
    /// Both passes run over the points in parallel. The result is identical to
    /// that of [`Slom::run`].
    ///
    /// # Errors
    ///
    /// See [`Slom::run`].
    pub fn par_run<V, D, N>(&self, data: &D, neighbors: &N) -> Result<SlomResult<D::Id>>
    where
        V: Vector,
        M: Metric<V> + Sync,
        D: Dataset<V> + Sync,
        N: NeighborSets<Id = D::Id> + Sync,
    {
        let ids = data.ids();
        ftlog::info!("SLOM ({}): scoring {} points in parallel", self.metric.name(), ids.len());

        let sets = ids
            .par_iter()
            .map(|&id| neighbor_set(neighbors, id))
            .collect::<Result<Vec<_>>>()?;

        let modified = ids
            .par_iter()
            .zip(&sets)
            .map(|(&id, set)| self.modified_distance_of(data, id, set))
            .collect::<Result<Vec<_>>>()?;
        let modified = ModifiedDistances::new(&ids, modified);

        let scores = ids
            .par_iter()
            .zip(&sets)
            .map(|(&id, set)| modified.score_of(id, set))
            .collect::<Result<Vec<_>>>()?;

        Self::finish(&ids, &modified, scores)
    }

    /// Computes the modified distance of the point `id` from the raw distances
    /// to its neighbors.
    fn modified_distance_of<V, D>(&self, data: &D, id: D::Id, set: &[D::Id]) -> Result<f64>
    where
        V: Vector,
        M: Metric<V>,
        D: Dataset<V>,
    {
        let x = data.get(id)?;
        let distances = set
            .iter()
            .filter(|&&y| y != id)
            .map(|&y| {
                let y = data.get(y)?;
                check_dim(x.dim(), y.dim())?;
                let d = self.metric.distance(x, y);
                if d.is_finite() && d >= 0.0 {
                    Ok(d)
                } else {
                    Err(StatsError::NumericDegeneracy(format!(
                        "{} distance from {id:?} to a neighbor is {d}",
                        self.metric.name()
                    )))
                }
            })
            .collect::<Result<Vec<_>>>()?;
        finite(modified_distance(&distances), "a modified distance")
    }

    /// Collects the scores and their range.
    fn finish<Id: PointId>(ids: &[Id], modified: &ModifiedDistances<Id>, scores: Vec<f64>) -> Result<SlomResult<Id>> {
        let mut minmax = MinMax::default();
        let mut store = ScoreStore::with_capacity(ids.len());
        for (&id, score) in ids.iter().zip(scores) {
            minmax.put(score);
            store.insert(id, score)?;
        }

        let mut modified_store = ScoreStore::with_capacity(ids.len());
        for &id in ids {
            modified_store.insert(id, modified.get(id)?)?;
        }

        let meta = ScoreMeta {
            actual_min: minmax.min().unwrap_or(0.0),
            actual_max: minmax.max().unwrap_or(0.0),
            theoretical_min: 0.0,
            theoretical_max: f64::INFINITY,
        };
        ftlog::info!("SLOM: scores range over [{}, {}]", meta.actual_min, meta.actual_max);

        Ok(SlomResult {
            outliers: OutlierResult { scores: store, meta },
            modified: modified_store,
        })
    }
}

/// Fetches the neighbor set of `id`, keeping the first occurrence of every
/// identifier.
fn neighbor_set<N: NeighborSets>(neighbors: &N, id: N::Id) -> Result<Vec<N::Id>> {
    let mut seen = HashSet::new();
    let set = neighbors
        .neighbors_of(id)?
        .into_iter()
        .filter(|&y| seen.insert(y))
        .collect::<Vec<_>>();
    ftlog::debug!("SLOM: {id:?} has {} spatial neighbors", set.len());
    Ok(set)
}

/// The modified distances from the first pass.
struct ModifiedDistances<Id> {
    /// Maps identifiers to their modified distance.
    values: HashMap<Id, f64>,
}

impl<Id: PointId> ModifiedDistances<Id> {
    /// Pairs the identifiers with their modified distances.
    fn new(ids: &[Id], values: Vec<f64>) -> Self {
        Self {
            values: ids.iter().copied().zip(values).collect(),
        }
    }

    /// Returns the modified distance of `id`.
    fn get(&self, id: Id) -> Result<f64> {
        self.values
            .get(&id)
            .copied()
            .ok_or_else(|| StatsError::UnknownPoint(format!("{id:?} is a neighbor but not part of the dataset")))
    }

    /// Computes the SLOM score of the point `id` with neighbor set `set`.
    fn score_of(&self, id: Id, set: &[Id]) -> Result<f64> {
        let own = self.get(id)?;
        let mut others = Vec::with_capacity(set.len());
        for &y in set {
            if y != id {
                others.push(self.get(y)?);
            }
        }
        finite(slom_score(own, &others), "a SLOM score")
    }
}

/// Computes the modified distance of a point from its distances to its
/// spatial neighbors, excluding itself.
///
/// This is the mean distance without the largest one. With fewer than two
/// neighbors the largest distance is returned, which is zero when there are
/// no neighbors at all.
///
/// # Examples
///
/// ```rust
/// use knn_stats::slom::modified_distance;
///
/// assert_eq!(modified_distance(&[2.0, 4.0]), 2.0);
/// assert_eq!(modified_distance(&[3.0]), 3.0);
/// assert_eq!(modified_distance(&[]), 0.0);
/// ```
#[must_use]
pub fn modified_distance(distances: &[f64]) -> f64 {
    let (sum, max) = distances
        .iter()
        .fold((0.0, 0.0_f64), |(sum, max), &d| (sum + d, max.max(d)));

    let cnt = distances.len();
    if cnt > 1 {
        #[allow(clippy::cast_precision_loss)]
        let denom = (cnt - 1) as f64;
        (sum - max) / denom
    } else {
        max
    }
}

/// Computes the SLOM score of a point from its own modified distance and the
/// modified distances of its spatial neighbors, excluding itself.
///
/// The point takes part in the vote of the asymmetry factor exactly once,
/// whether or not it is listed among its own neighbors. A point without
/// neighbors scores zero. With a single neighbor the asymmetry factor is 1,
/// where the published formula would divide by zero.
///
/// # Examples
///
/// ```rust
/// use knn_stats::slom::slom_score;
///
/// assert_eq!(slom_score(9.0, &[0.0]), 9.0);
/// assert_eq!(slom_score(1.0, &[1.0, 1.0]), 0.5);
/// assert_eq!(slom_score(5.0, &[]), 0.0);
/// ```
#[must_use]
pub fn slom_score(own: f64, neighbors: &[f64]) -> f64 {
    let cnt = neighbors.len();
    if cnt == 0 {
        return 0.0;
    }

    #[allow(clippy::cast_precision_loss)]
    let (n, n_plus) = (cnt as f64, (cnt + 1) as f64);
    let sum = neighbors.iter().sum::<f64>();
    let avg_plus = (sum + own) / n_plus;
    let avg = sum / n;

    let votes = neighbors.iter().map(|&d| vote(d, avg_plus)).sum::<f64>() + vote(own, avg_plus);
    let beta = if cnt > 1 {
        #[allow(clippy::cast_precision_loss)]
        let denom = (cnt - 1) as f64;
        votes.abs().max(1.0) / denom
    } else {
        1.0
    };

    beta / (1.0 + avg) * own
}

/// Returns +1 if `d` is above `avg_plus`, -1 if it is below, and 0 otherwise.
fn vote(d: f64, avg_plus: f64) -> f64 {
    if d > avg_plus {
        1.0
    } else if d < avg_plus {
        -1.0
    } else {
        0.0
    }
}
