//! Exhaustive kNN search over a dataset.

use core::marker::PhantomData;

use rayon::prelude::*;

use super::{KnnQuery, Neighbor, SizedHeap};
use crate::core::{check_dim, Dataset, Metric, Result, StatsError, Vector};

/// A kNN query service that compares the query against every point of a
/// dataset.
///
/// This is the reference implementation of [`KnnQuery`]. It is exact but
/// linear in the cardinality of the dataset for every query.
pub struct LinearKnn<'a, V, D: Dataset<V>, M>
where
    V: Vector,
{
    /// The dataset being searched.
    data: &'a D,
    /// The distance function.
    metric: M,
    /// The identifiers of the points, in enumeration order.
    ids: Vec<D::Id>,
    /// Whether to compute the distances with rayon.
    parallel: bool,
    /// Marker for the type of the vectors.
    _v: PhantomData<V>,
}

impl<'a, V: Vector, D: Dataset<V>, M: Metric<V>> LinearKnn<'a, V, D, M> {
    /// Creates a new `LinearKnn` over `data`, using `metric` for distances.
    pub fn new(data: &'a D, metric: M) -> Self {
        Self {
            data,
            metric,
            ids: data.ids(),
            parallel: false,
            _v: PhantomData,
        }
    }

    /// Sets whether distances are computed in parallel.
    ///
    /// The results do not depend on this setting.
    #[must_use]
    pub fn with_parallelism(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Returns the name of the metric in use.
    pub fn metric_name(&self) -> &str {
        self.metric.name()
    }

    /// Computes the distance from `query` to the point `id`.
    fn neighbor(&self, query: &V, id: D::Id) -> Result<Neighbor<D::Id>> {
        let distance = self.metric.distance(query, self.data.get(id)?);
        if distance.is_finite() && distance >= 0.0 {
            Ok(Neighbor { id, distance })
        } else {
            Err(StatsError::NumericDegeneracy(format!(
                "{} distance to {id:?} is {distance}",
                self.metric.name()
            )))
        }
    }
}

impl<V, D, M> KnnQuery<V> for LinearKnn<'_, V, D, M>
where
    V: Vector,
    D: Dataset<V> + Sync,
    M: Metric<V> + Sync,
{
    type Id = D::Id;

    fn knn(&self, query: &V, k: usize) -> Result<Vec<Neighbor<D::Id>>> {
        if k == 0 {
            return Err(StatsError::InvalidParameter("k must be at least 1".to_string()));
        }
        check_dim(self.data.dimensionality(), query.dim())?;
        let k = k.min(self.ids.len());

        let heap = if self.parallel {
            self.ids
                .par_iter()
                .map(|&id| self.neighbor(query, id))
                .try_fold(
                    || SizedHeap::new(k),
                    |mut heap, n| {
                        heap.push(n?);
                        Ok::<_, StatsError>(heap)
                    },
                )
                .try_reduce(|| SizedHeap::new(k), |a, b| Ok(a.merge(b)))?
        } else {
            let mut heap = SizedHeap::new(k);
            for &id in &self.ids {
                heap.push(self.neighbor(query, id)?);
            }
            heap
        };

        Ok(heap.into_sorted_vec())
    }

    fn knn_by_id(&self, id: D::Id, k: usize) -> Result<Vec<Neighbor<D::Id>>> {
        self.knn(self.data.get(id)?, k)
    }

    fn contains(&self, id: D::Id) -> bool {
        self.data.get(id).is_ok()
    }
}
